//! Embedded seed data.
//!
//! # Responsibility
//! - Parse the static JSON fixtures each store starts from.
//! - Validate model invariants once at load time, so a broken fixture fails
//!   loudly instead of seeding bad state.
//!
//! # Invariants
//! - Loading never mutates anything; each call returns a fresh copy, which
//!   is what makes store state reset on process restart.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::activity::Activity;
use crate::model::contact::Contact;
use crate::model::deal::{Deal, DealValidationError};
use crate::model::meeting::{Meeting, MeetingValidationError};

const CONTACTS_JSON: &str = include_str!("../fixtures/contacts.json");
const DEALS_JSON: &str = include_str!("../fixtures/deals.json");
const ACTIVITIES_JSON: &str = include_str!("../fixtures/activities.json");
const MEETINGS_JSON: &str = include_str!("../fixtures/meetings.json");

/// Error raised while loading seed fixtures.
#[derive(Debug)]
pub enum FixtureError {
    /// Fixture JSON does not parse into the record shape.
    Parse {
        fixture: &'static str,
        source: serde_json::Error,
    },
    InvalidDeal(DealValidationError),
    InvalidMeeting(MeetingValidationError),
}

impl Display for FixtureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse { fixture, source } => {
                write!(f, "fixture `{fixture}` failed to parse: {source}")
            }
            Self::InvalidDeal(err) => write!(f, "invalid deal fixture: {err}"),
            Self::InvalidMeeting(err) => write!(f, "invalid meeting fixture: {err}"),
        }
    }
}

impl Error for FixtureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse { source, .. } => Some(source),
            Self::InvalidDeal(err) => Some(err),
            Self::InvalidMeeting(err) => Some(err),
        }
    }
}

impl From<DealValidationError> for FixtureError {
    fn from(value: DealValidationError) -> Self {
        Self::InvalidDeal(value)
    }
}

impl From<MeetingValidationError> for FixtureError {
    fn from(value: MeetingValidationError) -> Self {
        Self::InvalidMeeting(value)
    }
}

/// Parses the contact seed set.
pub fn load_contacts() -> Result<Vec<Contact>, FixtureError> {
    parse("contacts", CONTACTS_JSON)
}

/// Parses and validates the deal seed set.
pub fn load_deals() -> Result<Vec<Deal>, FixtureError> {
    let deals: Vec<Deal> = parse("deals", DEALS_JSON)?;
    for deal in &deals {
        deal.validate()?;
    }
    Ok(deals)
}

/// Parses the activity seed set.
pub fn load_activities() -> Result<Vec<Activity>, FixtureError> {
    parse("activities", ACTIVITIES_JSON)
}

/// Parses and validates the meeting seed set.
pub fn load_meetings() -> Result<Vec<Meeting>, FixtureError> {
    let meetings: Vec<Meeting> = parse("meetings", MEETINGS_JSON)?;
    for meeting in &meetings {
        meeting.validate()?;
    }
    Ok(meetings)
}

/// All four seed collections, loaded together.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub contacts: Vec<Contact>,
    pub deals: Vec<Deal>,
    pub activities: Vec<Activity>,
    pub meetings: Vec<Meeting>,
}

/// Loads every fixture set in one call, for process bootstrap.
pub fn seed() -> Result<SeedData, FixtureError> {
    Ok(SeedData {
        contacts: load_contacts()?,
        deals: load_deals()?,
        activities: load_activities()?,
        meetings: load_meetings()?,
    })
}

fn parse<T: serde::de::DeserializeOwned>(
    fixture: &'static str,
    json: &str,
) -> Result<Vec<T>, FixtureError> {
    serde_json::from_str(json).map_err(|source| FixtureError::Parse { fixture, source })
}
