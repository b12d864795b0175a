//! Human-readable activity summary printed by the report tool

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use salon_common::{Appointment, Client};

use crate::aggregate::{appointments_per_day, client_leaderboard, ClientVisits};

const TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_clients: usize,
    pub total_appointments: usize,
    /// Raw service labels as entered, most frequent first
    pub top_services: Vec<(String, u64)>,
    /// Most recent days first
    pub recent_days: Vec<(NaiveDate, u64)>,
    pub top_clients: Vec<ClientVisits>,
}

impl Summary {
    pub fn build(clients: &[Client], appointments: &[Appointment]) -> Self {
        let mut label_counts: HashMap<&str, u64> = HashMap::new();
        for appointment in appointments {
            *label_counts.entry(appointment.service.as_str()).or_insert(0) += 1;
        }
        let mut top_services: Vec<(String, u64)> = label_counts
            .into_iter()
            .map(|(label, count)| (label.to_string(), count))
            .collect();
        top_services.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top_services.truncate(TOP_N);

        let recent_days: Vec<(NaiveDate, u64)> = appointments_per_day(appointments)
            .into_iter()
            .rev()
            .take(TOP_N)
            .collect();

        let mut top_clients = client_leaderboard(clients, appointments);
        top_clients.truncate(TOP_N);

        Self {
            total_clients: clients.len(),
            total_appointments: appointments.len(),
            top_services,
            recent_days,
            top_clients,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== CLIENTS ===")?;
        writeln!(f, "Total clients: {}", self.total_clients)?;
        writeln!(f)?;
        writeln!(f, "=== APPOINTMENTS ===")?;
        writeln!(f, "Total appointments: {}", self.total_appointments)?;

        if self.total_appointments == 0 {
            writeln!(f)?;
            return writeln!(f, "No appointments yet, create some appointments first.");
        }

        writeln!(f)?;
        writeln!(f, "Top services:")?;
        for (service, count) in &self.top_services {
            writeln!(f, "  {:<30} {}", service, count)?;
        }

        writeln!(f)?;
        writeln!(f, "Appointments per day (last {} days):", TOP_N)?;
        for (day, count) in &self.recent_days {
            writeln!(f, "  {}  {}", day, count)?;
        }

        writeln!(f)?;
        writeln!(f, "Top clients by visits:")?;
        for entry in &self.top_clients {
            writeln!(f, "  {:<30} {}", entry.name, entry.visits)?;
        }
        Ok(())
    }
}
