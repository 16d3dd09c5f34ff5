use crate::ModerationStatus;

use std::str::FromStr;

#[test]
fn test_moderation_status_as_str() {
    assert_eq!(ModerationStatus::Pending.as_str(), "Pending");
    assert_eq!(ModerationStatus::Submitted.as_str(), "Submitted");
    assert_eq!(ModerationStatus::Verified.as_str(), "Verified");
    assert_eq!(ModerationStatus::Rejected.as_str(), "Rejected");
}

#[test]
fn test_moderation_status_from_str() {
    assert_eq!(
        ModerationStatus::from_str("Submitted").unwrap(),
        ModerationStatus::Submitted
    );
    assert_eq!(
        ModerationStatus::from_str("Rejected").unwrap(),
        ModerationStatus::Rejected
    );
    assert!(ModerationStatus::from_str("deleted").is_err());
}

#[test]
fn test_moderation_status_initial() {
    assert_eq!(ModerationStatus::initial(true), ModerationStatus::Submitted);
    assert_eq!(ModerationStatus::initial(false), ModerationStatus::Pending);
}
