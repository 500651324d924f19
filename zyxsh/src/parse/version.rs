//! `show version` parser.

use indexmap::IndexMap;

/// Field name to value, in device order.
pub type VersionInfo = IndexMap<String, String>;

/// Parse `key : value | date` lines.
///
/// Each line with a colon is split on the first colon. The value is cut at
/// the first `|` so build dates are dropped. Lines without a colon are
/// ignored; a repeated key keeps the last value.
pub fn parse_version(output: &str) -> VersionInfo {
    let mut info = VersionInfo::new();
    for line in output.lines() {
        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };
        let value = rest.split('|').next().unwrap_or_default().trim();
        info.insert(key.trim().to_string(), value.to_string());
    }
    info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_cut_at_pipe() {
        let info = parse_version("Boot Version     : V2.00 | 07/08/2015");
        assert_eq!(info["Boot Version"], "V2.00");
    }

    #[test]
    fn test_gs1900_version() {
        let output = "show version\n\
                      Boot Version     : V2.00 | 07/08/2015\n\
                      Firmware Version : V2.50(AAHK.0) | 10/21/2019\n\
                      GS1900# ";
        let info = parse_version(output);
        assert_eq!(info.len(), 2);
        assert_eq!(info["Firmware Version"], "V2.50(AAHK.0)");
    }

    #[test]
    fn test_value_with_colons_splits_on_first() {
        let info = parse_version("MAC Address : AA:BB:CC:11:22:33\r\n");
        assert_eq!(info["MAC Address"], "AA:BB:CC:11:22:33");
    }

    #[test]
    fn test_no_colon_lines_ignored() {
        assert!(parse_version("no separator here\n\n").is_empty());
        assert!(parse_version("").is_empty());
    }
}
