pub mod env {
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    pub const CONFIG_DIR_ENV_VAR: &str = "GATEHOUSE_CONFIG_DIR";
    /// Prefix of overriding variables, e.g. `GATEHOUSE__AUTH__JWT__SECRET`.
    pub const ENV_PREFIX: &str = "GATEHOUSE";
    pub const ENV_SEPARATOR: &str = "__";
}

pub const DEFAULT_CONFIG_DIR: &str = "config";
pub const DEFAULT_ENVIRONMENT: &str = "production";
pub const BASE_CONFIG_FILE: &str = "base.json";

pub const DEFAULT_DENYLIST: [&str; 3] = ["Syria", "Afghanistan", "Iran"];

pub mod prod {
    pub mod geo {
        pub const LOOKUP_BASE_URL: &str = "https://ipapi.co";
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const JWT_SECRET: &str = "YS10ZXN0LXNpZ25pbmcta2V5LW9mLTMyLWJ5dGVzISE=";
    pub mod email_client {
        use std::time::Duration;

        pub const SENDER: &str = "test@email.com";
        pub const TIMEOUT: Duration = std::time::Duration::from_millis(200);
    }
    pub mod geo {
        use std::time::Duration;

        pub const TIMEOUT: Duration = std::time::Duration::from_millis(200);
    }
}
