//! Typed view of `apps:list` output.

use serde::Deserialize;

use super::error::PortalError;

/// One application row from `apps:list`. The CLI emits more fields; only the
/// identifiers matter here.
#[derive(Debug, Deserialize)]
pub struct AppEntry {
    #[serde(rename = "referenceId")]
    pub reference_id: String,
    pub id: String,
}

/// Strips a leading `wcp_` prefix that operators habitually paste along with
/// the reference id.
pub fn normalize_reference_id(reference_id: &str) -> &str {
    reference_id.strip_prefix("wcp_").unwrap_or(reference_id)
}

/// Parse the raw stdout of `apps:list`.
///
/// The CLI prints one human header line before the JSON array; it is stripped
/// when present. Output that already starts with `[` is parsed as-is.
pub fn parse_app_listing(stdout: &str) -> Result<Vec<AppEntry>, PortalError> {
    let payload = match stdout.trim_start() {
        rest if rest.starts_with('[') => rest,
        _ => match stdout.split_once('\n') {
            Some((_header, rest)) => rest,
            None => "",
        },
    };
    if payload.trim().is_empty() {
        return Err(PortalError::EmptyListing);
    }
    let apps: Vec<AppEntry> = serde_json::from_str(payload)?;
    Ok(apps)
}

/// Find the application id for a reference id within a parsed listing.
pub fn find_app_id(apps: &[AppEntry], reference_id: &str) -> Result<String, PortalError> {
    let wanted = normalize_reference_id(reference_id);
    apps.iter()
        .find(|app| app.reference_id == wanted)
        .map(|app| app.id.clone())
        .ok_or_else(|| PortalError::AppNotFound {
            reference_id: wanted.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = concat!(
        "Applications for tenant acme:\n",
        r#"[
            { "referenceId": "expenses", "id": "c9a1f0", "name": "Expenses" },
            { "referenceId": "onboard", "id": "77b2e4", "name": "Onboarding" }
        ]"#
    );

    #[test]
    fn strips_header_line() {
        let apps = parse_app_listing(LISTING).unwrap();
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].reference_id, "expenses");
        assert_eq!(apps[0].id, "c9a1f0");
    }

    #[test]
    fn bare_array_parses_without_header() {
        let apps = parse_app_listing(r#"[{ "referenceId": "x", "id": "1" }]"#).unwrap();
        assert_eq!(apps.len(), 1);
    }

    #[test]
    fn empty_payload_err() {
        assert!(matches!(
            parse_app_listing("Applications for tenant acme:\n"),
            Err(PortalError::EmptyListing)
        ));
        assert!(matches!(
            parse_app_listing("no newline at all"),
            Err(PortalError::EmptyListing)
        ));
    }

    #[test]
    fn malformed_json_err() {
        let out = "header\n[{ not json";
        assert!(matches!(
            parse_app_listing(out),
            Err(PortalError::Json(_))
        ));
    }

    #[test]
    fn find_present_reference_id() {
        let apps = parse_app_listing(LISTING).unwrap();
        assert_eq!(find_app_id(&apps, "onboard").unwrap(), "77b2e4");
    }

    #[test]
    fn find_absent_reference_id() {
        let apps = parse_app_listing(LISTING).unwrap();
        match find_app_id(&apps, "payroll") {
            Err(PortalError::AppNotFound { reference_id }) => {
                assert_eq!(reference_id, "payroll");
            }
            other => panic!("expected AppNotFound, got {other:?}"),
        }
    }

    #[test]
    fn wcp_prefix_is_normalized() {
        let apps = parse_app_listing(LISTING).unwrap();
        assert_eq!(find_app_id(&apps, "wcp_expenses").unwrap(), "c9a1f0");
        assert_eq!(normalize_reference_id("wcp_expenses"), "expenses");
        assert_eq!(normalize_reference_id("expenses"), "expenses");
    }
}
