//! Contact and activity list filtering.

use crate::model::activity::{Activity, ActivityType};
use crate::model::contact::Contact;

/// Combined contact list filter. Empty parts match everything, so the
/// default filter is the identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
    /// Case-insensitive substring matched against name, email and company.
    pub search: String,
    /// Exact tag that must be present; empty means no tag constraint.
    pub tag: String,
}

impl ContactFilter {
    fn matches(&self, contact: &Contact) -> bool {
        let matches_search = self.search.is_empty() || {
            let needle = self.search.to_lowercase();
            contact.name.to_lowercase().contains(&needle)
                || contact.email.to_lowercase().contains(&needle)
                || contact.company.to_lowercase().contains(&needle)
        };
        let matches_tag =
            self.tag.is_empty() || contact.tags.iter().any(|candidate| *candidate == self.tag);
        matches_search && matches_tag
    }
}

/// Returns contacts passing both filter predicates, in input order.
pub fn filter_contacts(contacts: &[Contact], filter: &ContactFilter) -> Vec<Contact> {
    contacts
        .iter()
        .filter(|contact| filter.matches(contact))
        .cloned()
        .collect()
}

/// Returns activities of the given type, or all of them when `kind` is
/// `None`. Input order is preserved.
pub fn filter_activities(activities: &[Activity], kind: Option<ActivityType>) -> Vec<Activity> {
    activities
        .iter()
        .filter(|activity| kind.map_or(true, |wanted| activity.kind == wanted))
        .cloned()
        .collect()
}

/// Collects every distinct tag across the contact list, in first-seen
/// order. Feeds tag filter dropdowns.
pub fn unique_tags(contacts: &[Contact]) -> Vec<String> {
    let mut seen = Vec::new();
    for contact in contacts {
        for tag in &contact.tags {
            if !seen.contains(tag) {
                seen.push(tag.clone());
            }
        }
    }
    seen
}
