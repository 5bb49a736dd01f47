use api_service::servers::apis::server;

pub mod contract;
pub mod environment;

pub type Started = environment::Environment<server::Running>;
