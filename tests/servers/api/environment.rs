use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use api_service::bootstrap::app::initialize_with_configuration;
use api_service::core::Backend;
use api_service::servers::apis::server::{ApiServer, Launcher, Running, Stopped};
use api_service_configuration::Configuration;

pub struct Environment<S> {
    pub config: Arc<Configuration>,
    pub backend: Arc<Backend>,
    pub server: ApiServer<S>,
}

impl<S> Environment<S> {
    /// Sets the daemon credentials in the variables the configuration names.
    pub fn set_daemon_credentials(&self, username: &str, password: &str) {
        env::set_var(&self.config.daemon.username_env_var, username);
        env::set_var(&self.config.daemon.password_env_var, password);
    }
}

impl Environment<Stopped> {
    pub fn new(configuration: &Arc<Configuration>) -> Self {
        let backend = initialize_with_configuration(configuration);

        let server = ApiServer::new(Launcher::new(configuration.http_api.bind_address));

        Self {
            config: configuration.clone(),
            backend,
            server,
        }
    }

    pub fn start(self) -> Environment<Running> {
        Environment {
            config: self.config,
            backend: self.backend.clone(),
            server: self.server.start(self.backend).unwrap(),
        }
    }
}

impl Environment<Running> {
    pub fn new(configuration: &Arc<Configuration>) -> Self {
        Environment::<Stopped>::new(configuration).start()
    }

    pub async fn stop(self) -> Environment<Stopped> {
        Environment {
            config: self.config,
            backend: self.backend,
            server: self.server.stop().await.unwrap(),
        }
    }

    pub fn bind_address(&self) -> SocketAddr {
        self.server.state.binding
    }
}
