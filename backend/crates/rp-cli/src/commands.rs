use rp_core::SortKey;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one page of user records as JSON
    List {
        /// Case-insensitive text matched against every column
        #[arg(long, default_value = "")]
        filter: String,

        /// Preset ordering: none, age, gender, a-z, newest
        #[arg(long, default_value = "none")]
        sort: SortKey,

        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Rows per page (defaults to view.page_size)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Verify a user whose profile is complete
    Verify { id: i64 },

    /// Reject a user
    Reject { id: i64 },

    /// Interactive moderation console on stdin
    Console,
}
