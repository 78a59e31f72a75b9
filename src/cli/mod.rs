use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Start the relay HTTP server
    Serve {
        #[arg(long, default_value_t = 5000)]
        port: u16,

        /// Base URL of the inference backend
        #[arg(long, default_value = "http://localhost:11434")]
        backend_url: String,

        #[arg(long, default_value = "phi3")]
        model: String,

        /// Optional supplementary knowledge text, loaded once at startup
        #[arg(long, default_value = "knowledge_base.txt")]
        knowledge_base: String,

        /// Serve canned answers instead of calling the backend
        #[arg(long)]
        mock_backend: bool,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the relay on all network interfaces
        #[arg(long)]
        public: bool,
    },

    /// Interactive terminal chat connected to the relay
    Chat {
        #[arg(long, default_value = "http://localhost:5000")]
        server: String,
    },
}
