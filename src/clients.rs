use std::future::Future;

use crate::{error::Result, model::movie::Movie};

pub mod omdb_client;

/// Anything able to resolve a title into movie metadata.
pub trait MovieSource {
    fn fetch_movie(&self, title: &str) -> impl Future<Output = Result<Movie>>;
}
