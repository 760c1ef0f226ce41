//! Identifier parsing and origin extraction.
//!
//! Identifiers have the shape `<sigil><localpart>:<server_name>`. The server
//! name may carry an explicit port (`example.org:8448`) or be a bracketed IPv6
//! literal (`[::1]:8448`); in both cases the whole `host[:port]` is the origin.
//! Every parse failure is reported as [`ExtractionError`]; nothing here panics.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::ExtractionError;

const MAX_SERVER_NAME_LEN: usize = 255;

/// Leading character that tells identifier kinds apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sigil {
    User,
    Room,
    RoomAlias,
    Event,
    Group,
}

impl Sigil {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '@' => Some(Sigil::User),
            '!' => Some(Sigil::Room),
            '#' => Some(Sigil::RoomAlias),
            '$' => Some(Sigil::Event),
            '+' => Some(Sigil::Group),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Sigil::User => '@',
            Sigil::Room => '!',
            Sigil::RoomAlias => '#',
            Sigil::Event => '$',
            Sigil::Group => '+',
        }
    }
}

/// Home-server label of an identifier.
///
/// Equality and hashing ignore ASCII case: server names are not
/// case-sensitive. [`ServerName::as_str`] keeps the spelling as written.
#[derive(Debug, Clone)]
pub struct ServerName {
    raw: String,
    normalized: String,
}

impl ServerName {
    /// Validate and wrap a bare server name (`host`, `host:port`, `[v6]:port`).
    pub fn parse(s: &str) -> Result<Self, ExtractionError> {
        if !is_valid_server_name(s) {
            return Err(ExtractionError::InvalidServerName(s.to_string()));
        }
        Ok(Self {
            raw: s.to_string(),
            normalized: s.to_ascii_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Lower-cased form used for deny-list matching.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

impl PartialEq for ServerName {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for ServerName {}

impl Hash for ServerName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl fmt::Display for ServerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A parsed identifier borrowing its localpart from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier<'a> {
    pub sigil: Sigil,
    pub localpart: &'a str,
    pub origin: ServerName,
}

/// Parse a full identifier.
///
/// The localpart ends at the first `:` whose remainder is a valid server
/// name, so the port colon of `@u:host:8448` is never split off and legacy
/// localparts containing `:` still resolve to their real origin. Scanning
/// stops at an IPv6 bracket.
pub fn parse(id: &str) -> Result<Identifier<'_>, ExtractionError> {
    let first = id.chars().next().ok_or(ExtractionError::Empty)?;
    let sigil = Sigil::from_char(first).ok_or(ExtractionError::UnknownSigil(first))?;
    let body = &id[first.len_utf8()..];

    let mut last_err = ExtractionError::MissingSeparator;
    for (idx, _) in body.match_indices(':') {
        let (localpart, server) = (&body[..idx], &body[idx + 1..]);
        if localpart.contains('[') {
            break;
        }
        match ServerName::parse(server) {
            Ok(origin) => {
                if localpart.is_empty() {
                    return Err(ExtractionError::EmptyLocalpart);
                }
                return Ok(Identifier { sigil, localpart, origin });
            }
            Err(e) => last_err = e,
        }
    }
    Err(last_err)
}

/// Extract the origin of a user, room, alias or event identifier.
pub fn origin_of(id: &str) -> Result<ServerName, ExtractionError> {
    parse(id).map(|parsed| parsed.origin)
}

fn is_valid_server_name(s: &str) -> bool {
    if s.is_empty() || s.len() > MAX_SERVER_NAME_LEN {
        return false;
    }

    let (host_ok, port) = match s.strip_prefix('[') {
        Some(rest) => {
            let Some((addr, tail)) = rest.split_once(']') else {
                return false;
            };
            let port = match tail {
                "" => None,
                t => match t.strip_prefix(':') {
                    Some(p) => Some(p),
                    None => return false,
                },
            };
            (is_ipv6_literal(addr), port)
        }
        None => match s.split_once(':') {
            Some((host, port)) => (is_dns_name(host), Some(port)),
            None => (is_dns_name(s), None),
        },
    };

    host_ok && port.map_or(true, is_valid_port)
}

// Also covers IPv4 literals.
fn is_dns_name(host: &str) -> bool {
    !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
}

fn is_ipv6_literal(addr: &str) -> bool {
    !addr.is_empty()
        && addr.contains(':')
        && addr
            .chars()
            .all(|c| c.is_ascii_hexdigit() || c == ':' || c == '.')
}

fn is_valid_port(p: &str) -> bool {
    !p.is_empty() && p.len() <= 5 && p.bytes().all(|b| b.is_ascii_digit()) && p.parse::<u16>().is_ok()
}
