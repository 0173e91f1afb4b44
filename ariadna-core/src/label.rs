use ariadna_boundary::Address;

/// Popup text of an address candidate.
///
/// The name wins; without a name the street and house number are used.
/// Returns `None` if there is nothing to show.
pub fn address_label(addr: &Address) -> Option<String> {
    let name = addr.name.trim();
    if !name.is_empty() {
        return Some(name.to_string());
    }
    let label = format!("{} {}", addr.street.trim(), addr.housenumber.trim());
    let label = label.trim();
    (!label.is_empty()).then(|| label.to_string())
}
