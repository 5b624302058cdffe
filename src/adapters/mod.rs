mod ktexa_client;

pub use ktexa_client::KtexaClient;
