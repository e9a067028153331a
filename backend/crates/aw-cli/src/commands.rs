use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create an account and sign in
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Sign in to an existing account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in user's balance
    Dashboard,

    /// Watch a simulated ad and earn points
    Watch,

    /// Call the ledger endpoint directly
    Credit {
        #[arg(long)]
        uid: String,
        #[arg(long, allow_negative_numbers = true)]
        points: i64,
        /// Watch ticket (verified credit mode)
        #[arg(long)]
        ticket: Option<String>,
    },

    /// Show the server's reward settings
    Rewards,
}
