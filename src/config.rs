use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "prompt-gateway")]
#[command(about = "Authenticated rate-limited proxy for an LLM completion API")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8000)]
    pub port: u16,

    // Rate limit max requests per window
    #[arg(long, default_value_t = 10)]
    pub rate_limit: usize,

    // Rate limit window in seconds
    #[arg(long, default_value_t = 60)]
    pub rate_window: u64,
}

// Environment-sourced settings, read once at startup
#[derive(Debug, Clone)]
pub struct Settings {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub frontend_origin: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            supabase_url: require("SUPABASE_URL"),
            supabase_anon_key: require("SUPABASE_ANON_KEY"),
            frontend_origin: require("FRONTEND_ORIGIN"),
        }
    }
}

fn require(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| panic!("{name} must be set"))
}
