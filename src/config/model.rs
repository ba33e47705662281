use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use url::Url;

use crate::error::UsageError;

const HTTPS_PREFIX: &str = "https://";

/// A validated probe target.
///
/// Only constructible through [`Host::parse`], which enforces the
/// `https://<label>(.<label>)+` shape with an alphanumeric final label of at
/// least two characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    raw: String,
    url: Url,
}

impl Host {
    pub fn parse(input: &str) -> Result<Self, UsageError> {
        if !is_valid_host(input) {
            return Err(UsageError::InvalidHost(input.to_string()));
        }
        let url = Url::parse(input).map_err(|_| UsageError::InvalidHost(input.to_string()))?;
        Ok(Self {
            raw: input.to_string(),
            url,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Full-string match of `https://` + one or more `label.` + a final label.
fn is_valid_host(input: &str) -> bool {
    let Some(domain) = input.strip_prefix(HTTPS_PREFIX) else {
        return false;
    };

    let labels: Vec<&str> = domain.split('.').collect();
    let Some((last, leading)) = labels.split_last() else {
        return false;
    };
    if leading.is_empty() {
        return false;
    }

    let leading_ok = leading.iter().all(|label| {
        let mut chars = label.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphanumeric() => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
            }
            _ => false,
        }
    });

    leading_ok && last.len() >= 2 && last.chars().all(|c| c.is_ascii_alphanumeric())
}

/// The ordered, non-empty list of hosts given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostList(Vec<Host>);

impl HostList {
    /// Splits on commas, trims each entry and drops the empty ones.
    /// Order and duplicates are preserved; the first invalid host is reported.
    pub fn parse(input: &str) -> Result<Self, UsageError> {
        let hosts = split_hosts(input)
            .into_iter()
            .map(Host::parse)
            .collect::<Result<Vec<_>, _>>()?;

        if hosts.is_empty() {
            return Err(UsageError::EmptyHostList);
        }
        Ok(Self(hosts))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Host> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromStr for HostList {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn split_hosts(input: &str) -> Vec<&str> {
    input
        .split(',')
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .collect()
}

/// Number of requests issued per host. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestCount(NonZeroU32);

impl RequestCount {
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl FromStr for RequestCount {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<NonZeroU32>()
            .map(Self)
            .map_err(|_| UsageError::InvalidCount(s.to_string()))
    }
}

impl fmt::Display for RequestCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
pub mod test {
    use super::*;

    #[test]
    fn test_split_hosts_trims_and_drops_empty_entries() {
        let hosts = split_hosts("  https://ya.ru , ,https://google.com,,  https://ya.ru  ");
        assert_eq!(hosts, vec!["https://ya.ru", "https://google.com", "https://ya.ru"]);
    }

    #[test]
    fn test_host_list_preserves_order_and_duplicates() {
        let list = HostList::parse("https://b.com, https://a.com,https://b.com").expect("valid list");
        let hosts: Vec<&str> = list.iter().map(Host::as_str).collect();
        assert_eq!(hosts, vec!["https://b.com", "https://a.com", "https://b.com"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_empty_host_list_is_rejected() {
        assert_eq!(HostList::parse(""), Err(UsageError::EmptyHostList));
        assert_eq!(HostList::parse(" , ,, "), Err(UsageError::EmptyHostList));
    }

    #[test]
    fn test_first_invalid_host_is_reported() {
        let err = HostList::parse("https://ya.ru,http://bad.ru,https://also").unwrap_err();
        assert_eq!(err, UsageError::InvalidHost("http://bad.ru".to_string()));
    }

    #[test]
    fn test_valid_hosts_are_accepted() {
        for host in [
            "https://ya.ru",
            "https://sub-domain.example.com",
            "https://a.b.c.d.io",
            "https://123.com",
        ] {
            assert!(Host::parse(host).is_ok(), "{host} should be accepted");
        }
    }

    #[test]
    fn test_invalid_hosts_are_rejected() {
        for host in [
            "http://ya.ru",
            "https://ya",
            "https://ya.r",
            "https://ya.ru/path",
            "https://ya.ru/",
            "https://ya.ru?q=1",
            "https://ya.ru:8443",
            "https://-ya.ru",
            "https://ya..ru",
            "https://.ru",
            "https://ya.r-u",
            "HTTPS://ya.ru",
            "ya.ru",
            "https://",
        ] {
            assert!(Host::parse(host).is_err(), "{host} should be rejected");
        }
    }

    #[test]
    fn test_host_displays_as_given() {
        let host = Host::parse("https://Example.COM").expect("valid host");
        assert_eq!(host.to_string(), "https://Example.COM");
        assert_eq!(host.url().host_str(), Some("example.com"));
    }

    #[test]
    fn test_count_must_be_positive_integer() {
        assert_eq!("3".parse::<RequestCount>().map(RequestCount::get), Ok(3));
        assert!("0".parse::<RequestCount>().is_err());
        assert!("-5".parse::<RequestCount>().is_err());
        assert!("2.5".parse::<RequestCount>().is_err());
        assert!("three".parse::<RequestCount>().is_err());
        assert!("".parse::<RequestCount>().is_err());
    }

    #[test]
    fn test_count_upper_bound_is_reported() {
        assert_eq!("4294967295".parse::<RequestCount>().map(RequestCount::get), Ok(u32::MAX));

        let err = "4294967296".parse::<RequestCount>().unwrap_err();
        assert_eq!(err, UsageError::InvalidCount("4294967296".to_string()));
        assert!(err.to_string().contains("between 1 and 4294967295"), "{err}");
    }
}
