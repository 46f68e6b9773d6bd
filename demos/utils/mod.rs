mod ord_client;

pub use ord_client::OrdClient;
