//! Financial summary data transfer objects

use serde::{Deserialize, Serialize};

/// Dashboard financial summary. Field names and shape are frozen for the
/// frontend, so this is returned bare rather than enveloped.
#[derive(Debug, Serialize, Deserialize)]
pub struct FinancialSummaryResponse {
    /// All-time revenue in whole rupiah
    pub total_pendapatan: i64,
    /// Revenue within the current calendar month
    pub pendapatan_bulan_ini: i64,
    /// Monthly revenue series for the chart
    pub grafik: GrafikData,
    /// The five most recent payments, newest first
    pub recent_transactions: Vec<RecentTransaction>,
}

/// Chart series: one label and one value per month, chronological.
#[derive(Debug, Serialize, Deserialize)]
pub struct GrafikData {
    /// Human-readable month labels, e.g. "Maret 2025"
    pub labels: Vec<String>,
    /// Revenue per month, same order as `labels`
    pub data: Vec<i64>,
}

/// One row of the recent-transactions table.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecentTransaction {
    /// Tenant name
    pub penyewa: String,
    pub jumlah: i64,
    /// Formatted date, e.g. "05 Mar 2025"
    pub tanggal: String,
    pub keterangan: String,
}
