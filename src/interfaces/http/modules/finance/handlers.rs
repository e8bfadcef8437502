//! Financial summary handler
//!
//! Recomputed on every request over the full payment history; nothing is
//! cached or materialized. Fetch once, then aggregate in one pass.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Datelike, Utc};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use super::dto::{FinancialSummaryResponse, GrafikData, RecentTransaction};
use crate::infrastructure::database::entities::{penyewa, riwayat_pembayaran};
use crate::interfaces::http::common::ApiResponse;

/// The chart covers the most recent six calendar months, current month
/// included. The payment table itself is unbounded.
const TREND_MONTHS: i32 = 6;

/// How many rows the recent-transactions table shows.
const RECENT_LIMIT: usize = 5;

/// Finance handler state.
#[derive(Clone)]
pub struct FinanceState {
    pub db: DatabaseConnection,
}

pub async fn financial_summary(
    State(state): State<FinanceState>,
) -> Result<Json<FinancialSummaryResponse>, (StatusCode, Json<ApiResponse<()>>)> {
    let rows = riwayat_pembayaran::Entity::find()
        .order_by_asc(riwayat_pembayaran::Column::TanggalBayar)
        .order_by_asc(riwayat_pembayaran::Column::Id)
        .find_also_related(penyewa::Entity)
        .all(&state.db)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(e.to_string())),
            )
        })?;

    Ok(Json(build_summary(&rows, Utc::now())))
}

/// Aggregate a chronologically ascending payment list into the summary
/// payload. Pure so the whole report is testable with a pinned clock.
fn build_summary(
    rows: &[(riwayat_pembayaran::Model, Option<penyewa::Model>)],
    now: DateTime<Utc>,
) -> FinancialSummaryResponse {
    let mut total_pendapatan = 0i64;
    let mut pendapatan_bulan_ini = 0i64;
    let mut buckets: BTreeMap<(i32, u32), i64> = BTreeMap::new();

    let now_idx = month_index(now.year(), now.month());

    for (payment, _) in rows {
        total_pendapatan += payment.jumlah;

        let (year, month) = (payment.tanggal_bayar.year(), payment.tanggal_bayar.month());
        if year == now.year() && month == now.month() {
            pendapatan_bulan_ini += payment.jumlah;
        }
        *buckets.entry((year, month)).or_insert(0) += payment.jumlah;
    }

    let mut labels = Vec::new();
    let mut data = Vec::new();
    for ((year, month), sum) in buckets {
        let age = now_idx - month_index(year, month);
        if (0..TREND_MONTHS).contains(&age) {
            labels.push(month_label(year, month));
            data.push(sum);
        }
    }

    let recent_transactions = rows
        .iter()
        .rev()
        .take(RECENT_LIMIT)
        .map(|(payment, tenant)| RecentTransaction {
            penyewa: tenant
                .as_ref()
                .map(|t| t.nama_lengkap.clone())
                .unwrap_or_default(),
            jumlah: payment.jumlah,
            tanggal: short_date(payment.tanggal_bayar),
            keterangan: payment.keterangan.clone(),
        })
        .collect();

    FinancialSummaryResponse {
        total_pendapatan,
        pendapatan_bulan_ini,
        grafik: GrafikData { labels, data },
        recent_transactions,
    }
}

/// Months since year zero; subtraction gives calendar-month distance.
fn month_index(year: i32, month: u32) -> i32 {
    year * 12 + month as i32 - 1
}

const BULAN: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

const BULAN_SINGKAT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// "Maret 2025"
fn month_label(year: i32, month: u32) -> String {
    format!("{} {}", BULAN[(month as usize - 1) % 12], year)
}

/// "05 Mar 2025"
fn short_date(dt: DateTime<Utc>) -> String {
    format!(
        "{:02} {} {}",
        dt.day(),
        BULAN_SINGKAT[(dt.month() as usize - 1) % 12],
        dt.year()
    )
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn tenant(id: i32, nama: &str) -> penyewa::Model {
        penyewa::Model {
            id,
            nama_lengkap: nama.to_string(),
            nomor_hp: "0812000000".to_string(),
            ktp_foto: None,
            kamar_id: None,
            tanggal_masuk: chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            durasi_sewa_bulan: 1,
        }
    }

    fn payment(
        id: i32,
        jumlah: i64,
        at: DateTime<Utc>,
        keterangan: &str,
    ) -> riwayat_pembayaran::Model {
        riwayat_pembayaran::Model {
            id,
            penyewa_id: 1,
            tanggal_bayar: at,
            jumlah,
            keterangan: keterangan.to_string(),
            bukti_transfer: None,
        }
    }

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 10, 0, 0).unwrap()
    }

    #[test]
    fn empty_history_reports_zeroes() {
        let summary = build_summary(&[], at(2025, 4, 15));
        assert_eq!(summary.total_pendapatan, 0);
        assert_eq!(summary.pendapatan_bulan_ini, 0);
        assert!(summary.grafik.labels.is_empty());
        assert!(summary.recent_transactions.is_empty());
    }

    #[test]
    fn march_and_april_payments_aggregate_as_expected() {
        let budi = tenant(1, "Budi Santoso");
        let rows = vec![
            (
                payment(1, 500_000, at(2025, 3, 5), "Bayar kost Maret"),
                Some(budi.clone()),
            ),
            (
                payment(2, 300_000, at(2025, 3, 20), "Pelunasan Maret"),
                Some(budi.clone()),
            ),
            (
                payment(3, 200_000, at(2025, 4, 2), "DP April"),
                Some(budi),
            ),
        ];

        let summary = build_summary(&rows, at(2025, 4, 10));

        assert_eq!(summary.total_pendapatan, 1_000_000);
        assert_eq!(summary.pendapatan_bulan_ini, 200_000);
        assert_eq!(summary.grafik.labels, vec!["Maret 2025", "April 2025"]);
        assert_eq!(summary.grafik.data, vec![800_000, 200_000]);
    }

    #[test]
    fn trend_is_capped_to_six_months() {
        let budi = tenant(1, "Budi");
        let rows: Vec<_> = (1..=10)
            .map(|month| {
                (
                    payment(month as i32, 100_000, at(2025, month, 5), "Bayar"),
                    Some(budi.clone()),
                )
            })
            .collect();

        let summary = build_summary(&rows, at(2025, 10, 20));

        assert_eq!(summary.grafik.labels.len(), 6);
        assert_eq!(summary.grafik.labels[0], "Mei 2025");
        assert_eq!(summary.grafik.labels[5], "Oktober 2025");
        // The total still covers everything, including months off the chart.
        assert_eq!(summary.total_pendapatan, 1_000_000);
    }

    #[test]
    fn year_boundary_keeps_the_window_contiguous() {
        let budi = tenant(1, "Budi");
        let rows = vec![
            (
                payment(1, 100_000, at(2024, 11, 5), "November"),
                Some(budi.clone()),
            ),
            (
                payment(2, 200_000, at(2025, 1, 5), "Januari"),
                Some(budi),
            ),
        ];

        let summary = build_summary(&rows, at(2025, 2, 1));

        assert_eq!(
            summary.grafik.labels,
            vec!["November 2024", "Januari 2025"]
        );
        assert_eq!(summary.grafik.data, vec![100_000, 200_000]);
    }

    #[test]
    fn recent_transactions_are_capped_and_newest_first() {
        let budi = tenant(1, "Budi");
        let rows: Vec<_> = (1..=8)
            .map(|day| {
                (
                    payment(day as i32, 50_000 * day as i64, at(2025, 4, day), "Bayar"),
                    Some(budi.clone()),
                )
            })
            .collect();

        let summary = build_summary(&rows, at(2025, 4, 30));

        assert_eq!(summary.recent_transactions.len(), 5);
        assert_eq!(summary.recent_transactions[0].tanggal, "08 Apr 2025");
        assert_eq!(summary.recent_transactions[4].tanggal, "04 Apr 2025");
        assert_eq!(summary.recent_transactions[0].jumlah, 400_000);
    }

    #[test]
    fn recent_transactions_carry_tenant_name_and_note() {
        let rows = vec![(
            payment(1, 500_000, at(2025, 3, 5), "Bayar kost Maret 2025"),
            Some(tenant(7, "Siti Aminah")),
        )];

        let summary = build_summary(&rows, at(2025, 3, 31));

        let tx = &summary.recent_transactions[0];
        assert_eq!(tx.penyewa, "Siti Aminah");
        assert_eq!(tx.keterangan, "Bayar kost Maret 2025");
        assert_eq!(tx.tanggal, "05 Mar 2025");
    }

    #[test]
    fn month_labels_use_indonesian_names() {
        assert_eq!(month_label(2025, 3), "Maret 2025");
        assert_eq!(month_label(2024, 8), "Agustus 2024");
        assert_eq!(month_label(2025, 12), "Desember 2025");
    }
}
