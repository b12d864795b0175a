//! Revenue aggregation
//!
//! Single pass over the loaded clients and appointments. Produces a
//! [`StatsReport`] value; nothing is written here.

use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, NaiveDateTime};
use salon_common::{Appointment, Client};
use serde::Serialize;

use crate::normalize::normalize_service;
use crate::pricing::PriceTable;

/// Which optional sections to include
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub include_roster: bool,
    pub include_listing: bool,
    pub include_leaderboard: bool,
    pub include_daily: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            include_roster: true,
            include_listing: true,
            include_leaderboard: true,
            include_daily: true,
        }
    }
}

/// Per-service totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceStats {
    pub service: String,
    pub count: u64,
    pub price: f64,
    pub total_revenue: f64,
}

/// Appointment count for one client name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientVisits {
    pub name: String,
    pub visits: u64,
}

/// Roster entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientEntry {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
}

/// Listing entry; `client_name` is None when the client row is missing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentEntry {
    pub id: i64,
    pub client_id: i64,
    pub client_name: Option<String>,
    pub service: String,
    pub created_at: NaiveDateTime,
}

/// Structured revenue report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    /// Count desc, then service name
    pub services: Vec<ServiceStats>,
    pub total_revenue: f64,
    pub service_counts: BTreeMap<String, u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_clients: Option<Vec<ClientVisits>>,
    /// `YYYY-MM-DD` -> appointments booked that day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointments_per_day: Option<BTreeMap<String, u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clients: Option<Vec<ClientEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointments: Option<Vec<AppointmentEntry>>,
}

/// Build the report, or `None` when there are no appointments
pub fn aggregate(
    clients: &[Client],
    appointments: &[Appointment],
    prices: &PriceTable,
    options: &ReportOptions,
) -> Option<StatsReport> {
    if appointments.is_empty() {
        return None;
    }

    let service_counts = count_services(appointments);

    let mut services: Vec<ServiceStats> = service_counts
        .iter()
        .map(|(service, &count)| {
            let price = prices.price_of(service);
            ServiceStats {
                service: service.clone(),
                count,
                price,
                total_revenue: price * count as f64,
            }
        })
        .collect();
    services.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.service.cmp(&b.service)));

    let total_revenue = services.iter().map(|s| s.total_revenue).sum();

    let top_clients = options
        .include_leaderboard
        .then(|| client_leaderboard(clients, appointments));

    let appointments_per_day = options.include_daily.then(|| {
        appointments_per_day(appointments)
            .into_iter()
            .map(|(day, count)| (day.format("%Y-%m-%d").to_string(), count))
            .collect()
    });

    let roster = options.include_roster.then(|| client_roster(clients));
    let listing = options
        .include_listing
        .then(|| appointment_listing(clients, appointments));

    Some(StatsReport {
        services,
        total_revenue,
        service_counts,
        top_clients,
        appointments_per_day,
        clients: roster,
        appointments: listing,
    })
}

/// Normalized service -> count
pub fn count_services(appointments: &[Appointment]) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for appointment in appointments {
        *counts.entry(normalize_service(&appointment.service)).or_insert(0) += 1;
    }
    counts
}

/// Appointments per client name, most visits first
///
/// Appointments whose client row is missing are skipped. Clients sharing a
/// name are counted together.
pub fn client_leaderboard(clients: &[Client], appointments: &[Appointment]) -> Vec<ClientVisits> {
    let names = names_by_id(clients);

    let mut counts: HashMap<&str, u64> = HashMap::new();
    for appointment in appointments {
        if let Some(&name) = names.get(&appointment.client_id) {
            *counts.entry(name).or_insert(0) += 1;
        }
    }

    let mut board: Vec<ClientVisits> = counts
        .into_iter()
        .map(|(name, visits)| ClientVisits {
            name: name.to_string(),
            visits,
        })
        .collect();
    board.sort_by(|a, b| b.visits.cmp(&a.visits).then_with(|| a.name.cmp(&b.name)));
    board
}

/// Calendar day -> appointments created that day
pub fn appointments_per_day(appointments: &[Appointment]) -> BTreeMap<NaiveDate, u64> {
    let mut per_day = BTreeMap::new();
    for appointment in appointments {
        *per_day.entry(appointment.created_at.date()).or_insert(0) += 1;
    }
    per_day
}

fn names_by_id(clients: &[Client]) -> HashMap<i64, &str> {
    clients.iter().map(|c| (c.id, c.name.as_str())).collect()
}

fn client_roster(clients: &[Client]) -> Vec<ClientEntry> {
    let mut roster: Vec<ClientEntry> = clients
        .iter()
        .map(|c| ClientEntry {
            id: c.id,
            name: c.name.clone(),
            phone: c.phone.clone(),
        })
        .collect();
    roster.sort_by_key(|c| c.id);
    roster
}

fn appointment_listing(clients: &[Client], appointments: &[Appointment]) -> Vec<AppointmentEntry> {
    let names = names_by_id(clients);

    let mut listing: Vec<AppointmentEntry> = appointments
        .iter()
        .map(|a| AppointmentEntry {
            id: a.id,
            client_id: a.client_id,
            client_name: names.get(&a.client_id).map(|n| n.to_string()),
            service: a.service.clone(),
            created_at: a.created_at,
        })
        .collect();
    listing.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    listing
}
