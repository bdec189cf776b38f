/// A hostname broken into the labels left of, at, and right of the registrable domain.
///
/// `tld` keeps a leading `.` when it was stripped off a longer hostname
/// (`"sub.example.co.uk"` gives `".co.uk"`) and has none when the hostname
/// was itself a public suffix (`"co.uk"` gives `"uk"`). Use
/// [`SplitResult::public_suffix`] for the dotless form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitResult {
    pub subdomain: String,
    pub domain: String,
    pub tld: String,
}

impl SplitResult {
    pub fn public_suffix(&self) -> &str {
        self.tld.strip_prefix('.').unwrap_or(&self.tld)
    }

    /// The registrable name, `domain` plus its public suffix.
    pub fn registrable(&self) -> String {
        match (self.domain.is_empty(), self.public_suffix()) {
            (_, "") => self.domain.clone(),
            (true, suffix) => suffix.to_string(),
            (false, suffix) => format!("{}.{}", self.domain, suffix),
        }
    }
}

/// Public suffix lookup. Returns `(suffix, is_icann)`, with an empty suffix
/// when no rule matched.
pub trait SuffixLookup {
    fn public_suffix(&self, host: &str) -> (String, bool);
}

/// Lookup backed by the compiled-in Public Suffix List.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicSuffixList;

impl SuffixLookup for PublicSuffixList {
    fn public_suffix(&self, host: &str) -> (String, bool) {
        match psl::suffix(host.as_bytes()) {
            Some(suffix) => (
                String::from_utf8_lossy(suffix.as_bytes()).into_owned(),
                matches!(suffix.typ(), Some(psl::Type::Icann)),
            ),
            None => (String::new(), false),
        }
    }
}

pub fn split_domain(host: &str) -> SplitResult {
    split_domain_with(&PublicSuffixList, host)
}

pub fn split_domain_with<L: SuffixLookup + ?Sized>(lookup: &L, host: &str) -> SplitResult {
    let mut result = SplitResult::default();
    if host.is_empty() {
        return result;
    }

    let (suffix, _) = lookup.public_suffix(host);
    if suffix == host {
        let labels: Vec<&str> = host.split('.').collect();
        match labels.len() {
            1 => result.domain = labels[0].to_string(),
            2 => {
                result.domain = labels[0].to_string();
                result.tld = labels[1].to_string();
            }
            n => {
                result.subdomain = labels[..n - 2].join(".");
                result.domain = labels[n - 2].to_string();
                result.tld = labels[n - 1].to_string();
            }
        }
        return result;
    }

    if !suffix.is_empty() {
        result.tld = format!(".{}", suffix);
    }

    let rest = host.strip_suffix(result.tld.as_str()).unwrap_or(host);
    let labels: Vec<&str> = rest.split('.').collect();
    let n = labels.len();
    result.domain = labels[n - 1].to_string();
    if n > 1 {
        result.subdomain = labels[..n - 1].join(".");
    }

    result
}
