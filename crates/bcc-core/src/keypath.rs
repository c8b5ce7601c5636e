use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

const SEPARATOR: char = '.';

/// Ordered key segments, e.g. `project_options.connections.proxy`.
///
/// Parsing splits on every `.` and keeps empty segments, so `""` is one empty
/// segment and `a..b` is `a`, `""`, `b`. The zero-segment path only comes from
/// [`KeyPath::root`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    pub fn parse(dotted: &str) -> Self {
        KeyPath(dotted.split(SEPARATOR).map(str::to_owned).collect())
    }

    pub fn root() -> Self {
        KeyPath(Vec::new())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for KeyPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(KeyPath::parse(s))
    }
}

impl<S: Into<String>> FromIterator<S> for KeyPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        KeyPath(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            f.write_str(seg)?;
        }
        Ok(())
    }
}
