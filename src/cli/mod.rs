use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API
    Serve {
        #[arg(long, env = "PORT", default_value_t = 5000)]
        port: u16,

        /// Address to bind; use 0.0.0.0 to expose on all interfaces
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// List companies with their models
    Companies {
        /// Only show companies whose name or model names contain this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one company and its full model records
    Company {
        company_id: String,
    },

    /// List every model in the catalog
    Models,

    /// Show one model, including code snippets
    Model {
        model_id: String,
    },

    /// List providers with a registered connector
    Providers,

    /// Verify an API key against the provider behind a model
    TestConnection {
        model_id: String,

        #[arg(short = 'k', long, env = "MODELPROBE_API_KEY", hide_env_values = true)]
        api_key: String,
    },

    /// Send one prompt to a model and print the normalized reply
    Manual {
        model_id: String,

        #[arg(short = 'k', long, env = "MODELPROBE_API_KEY", hide_env_values = true)]
        api_key: String,

        #[arg(short, long)]
        prompt: String,
    },
}
