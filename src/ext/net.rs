use crate::utils::error::{ExtError, Result};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use url::Url;

pub trait UrlExt {
    fn is_https(&self) -> bool;
    /// `host:port` when a non-default port is present, otherwise just the host.
    fn host_with_port(&self) -> Option<String>;
    /// Scheme, host and port without path, query or fragment.
    fn base_url(&self) -> String;
    /// Query parameters; later duplicates win.
    fn query_map(&self) -> HashMap<String, String>;
    fn with_query_param(&self, key: &str, value: &str) -> Url;
    fn without_query(&self) -> Url;
    fn append_segment(&self, segment: &str) -> Result<Url>;
}

impl UrlExt for Url {
    fn is_https(&self) -> bool {
        self.scheme() == "https"
    }

    fn host_with_port(&self) -> Option<String> {
        let host = self.host_str()?;
        Some(match self.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        })
    }

    fn base_url(&self) -> String {
        match self.host_with_port() {
            Some(authority) => format!("{}://{}", self.scheme(), authority),
            None => format!("{}:", self.scheme()),
        }
    }

    fn query_map(&self) -> HashMap<String, String> {
        self.query_pairs().into_owned().collect()
    }

    fn with_query_param(&self, key: &str, value: &str) -> Url {
        let mut url = self.clone();
        url.query_pairs_mut().append_pair(key, value);
        url
    }

    fn without_query(&self) -> Url {
        let mut url = self.clone();
        url.set_query(None);
        url.set_fragment(None);
        url
    }

    fn append_segment(&self, segment: &str) -> Result<Url> {
        let mut url = self.clone();
        url.path_segments_mut()
            .map_err(|_| ExtError::invalid_value("url", self, "URL cannot be a base"))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }
}

pub trait IpAddrExt {
    /// Private, loopback, link-local or IPv6 unique-local.
    fn is_private_or_local(&self) -> bool;
    /// Membership in a CIDR block such as `192.168.1.0/24`.
    fn is_in_subnet(&self, cidr: &str) -> Result<bool>;
    /// Inclusive range check; addresses of different families never match.
    fn is_in_range(&self, start: &IpAddr, end: &IpAddr) -> bool;
    fn to_u128(&self) -> u128;
}

impl IpAddrExt for IpAddr {
    fn is_private_or_local(&self) -> bool {
        match self {
            IpAddr::V4(v4) => Ipv4Addr::is_private(v4) || v4.is_loopback() || v4.is_link_local(),
            IpAddr::V6(v6) => {
                let first = v6.segments()[0];
                v6.is_loopback() || (first & 0xfe00) == 0xfc00 || (first & 0xffc0) == 0xfe80
            }
        }
    }

    fn is_in_subnet(&self, cidr: &str) -> Result<bool> {
        let (network, prefix) = cidr
            .trim()
            .split_once('/')
            .ok_or_else(|| ExtError::invalid_value("cidr", cidr, "Expected address/prefix"))?;
        let network: IpAddr = network
            .parse()
            .map_err(|_| ExtError::invalid_value("cidr", cidr, "Invalid network address"))?;
        let prefix: u32 = prefix
            .parse()
            .map_err(|_| ExtError::invalid_value("cidr", cidr, "Invalid prefix length"))?;

        let bits = match network {
            IpAddr::V4(_) => 32,
            IpAddr::V6(_) => 128,
        };
        if prefix > bits {
            return Err(ExtError::invalid_value(
                "cidr",
                cidr,
                format!("Prefix length must be at most {}", bits),
            ));
        }
        if self.is_ipv4() != network.is_ipv4() {
            return Ok(false);
        }

        let shift = bits - prefix;
        let mask = if prefix == 0 {
            0
        } else {
            (u128::MAX >> (128 - bits)) >> shift << shift
        };
        Ok(self.to_u128() & mask == network.to_u128() & mask)
    }

    fn is_in_range(&self, start: &IpAddr, end: &IpAddr) -> bool {
        if self.is_ipv4() != start.is_ipv4() || self.is_ipv4() != end.is_ipv4() {
            return false;
        }
        let value = self.to_u128();
        value >= start.to_u128() && value <= end.to_u128()
    }

    fn to_u128(&self) -> u128 {
        match self {
            IpAddr::V4(v4) => u128::from(u32::from(*v4)),
            IpAddr::V6(v6) => u128::from(*v6),
        }
    }
}

impl IpAddrExt for Ipv4Addr {
    fn is_private_or_local(&self) -> bool {
        IpAddr::V4(*self).is_private_or_local()
    }

    fn is_in_subnet(&self, cidr: &str) -> Result<bool> {
        IpAddr::V4(*self).is_in_subnet(cidr)
    }

    fn is_in_range(&self, start: &IpAddr, end: &IpAddr) -> bool {
        IpAddr::V4(*self).is_in_range(start, end)
    }

    fn to_u128(&self) -> u128 {
        IpAddr::V4(*self).to_u128()
    }
}

impl IpAddrExt for Ipv6Addr {
    fn is_private_or_local(&self) -> bool {
        IpAddr::V6(*self).is_private_or_local()
    }

    fn is_in_subnet(&self, cidr: &str) -> Result<bool> {
        IpAddr::V6(*self).is_in_subnet(cidr)
    }

    fn is_in_range(&self, start: &IpAddr, end: &IpAddr) -> bool {
        IpAddr::V6(*self).is_in_range(start, end)
    }

    fn to_u128(&self) -> u128 {
        IpAddr::V6(*self).to_u128()
    }
}
