use async_trait::async_trait;
use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use ariadna_boundary::{ReverseResult, SearchResult};

use crate::{into_results, Result};

/// Forward and reverse lookups of addresses.
#[async_trait(?Send)]
pub trait GeocodingApi {
    async fn search(&self, address: &str) -> Result<Vec<SearchResult>>;
    async fn reverse(&self, lat: f64, lng: f64) -> Result<Vec<ReverseResult>>;
}

/// Public Ariadna geocoding API
#[derive(Clone)]
pub struct GeocoderApi {
    url: String,
}

impl GeocoderApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    fn search_url(&self, address: &str) -> String {
        let encoded_address = utf8_percent_encode(address, NON_ALPHANUMERIC);
        format!("{}/search/{encoded_address}", self.url)
    }

    fn reverse_url(&self, lat: f64, lng: f64) -> String {
        format!("{}/reverse/{lat}/{lng}", self.url)
    }
}

#[async_trait(?Send)]
impl GeocodingApi for GeocoderApi {
    async fn search(&self, address: &str) -> Result<Vec<SearchResult>> {
        let url = self.search_url(address);
        log::debug!("GET {url}");
        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;
        into_results(response).await
    }

    async fn reverse(&self, lat: f64, lng: f64) -> Result<Vec<ReverseResult>> {
        let url = self.reverse_url(lat, lng);
        log::debug!("GET {url}");
        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;
        into_results(response).await
    }
}
