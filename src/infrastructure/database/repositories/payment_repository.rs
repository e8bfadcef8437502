//! SeaORM implementation of PaymentRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::payment::{
    NewPayment, Payment, PaymentDetail, PaymentFilter, PaymentPage, PaymentPatch,
    PaymentRepository,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{penyewa, riwayat_pembayaran};

fn payment_to_domain(m: riwayat_pembayaran::Model) -> Payment {
    Payment {
        id: m.id,
        penyewa_id: m.penyewa_id,
        tanggal_bayar: m.tanggal_bayar,
        jumlah: m.jumlah,
        keterangan: m.keterangan,
        bukti_transfer: m.bukti_transfer,
    }
}

pub struct SeaOrmPaymentRepository {
    db: DatabaseConnection,
}

impl SeaOrmPaymentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn tenant_names(&self, ids: Vec<i32>) -> DomainResult<HashMap<i32, String>> {
        let mut names = HashMap::new();
        if ids.is_empty() {
            return Ok(names);
        }
        for tenant in penyewa::Entity::find()
            .filter(penyewa::Column::Id.is_in(ids))
            .all(&self.db)
            .await?
        {
            names.insert(tenant.id, tenant.nama_lengkap);
        }
        Ok(names)
    }

    async fn with_name(&self, model: riwayat_pembayaran::Model) -> DomainResult<PaymentDetail> {
        let names = self.tenant_names(vec![model.penyewa_id]).await?;
        let penyewa_nama = names.get(&model.penyewa_id).cloned().unwrap_or_default();
        Ok(PaymentDetail {
            payment: payment_to_domain(model),
            penyewa_nama,
        })
    }
}

#[async_trait]
impl PaymentRepository for SeaOrmPaymentRepository {
    async fn find_page(
        &self,
        filter: &PaymentFilter,
        page: u64,
        limit: u64,
    ) -> DomainResult<PaymentPage> {
        let mut query = riwayat_pembayaran::Entity::find();
        if let Some(penyewa_id) = filter.penyewa_id {
            query = query.filter(riwayat_pembayaran::Column::PenyewaId.eq(penyewa_id));
        }

        let paginator = query
            .order_by_desc(riwayat_pembayaran::Column::TanggalBayar)
            .paginate(&self.db, limit.max(1));
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.saturating_sub(1)).await?;

        let names = self
            .tenant_names(models.iter().map(|m| m.penyewa_id).collect())
            .await?;
        let items = models
            .into_iter()
            .map(|m| {
                let penyewa_nama = names.get(&m.penyewa_id).cloned().unwrap_or_default();
                PaymentDetail {
                    payment: payment_to_domain(m),
                    penyewa_nama,
                }
            })
            .collect();

        Ok(PaymentPage { items, total })
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<PaymentDetail>> {
        let model = riwayat_pembayaran::Entity::find_by_id(id).one(&self.db).await?;
        match model {
            Some(m) => Ok(Some(self.with_name(m).await?)),
            None => Ok(None),
        }
    }

    async fn save(&self, new: NewPayment) -> DomainResult<PaymentDetail> {
        let tenant = penyewa::Entity::find_by_id(new.penyewa_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found("Penyewa", new.penyewa_id))?;

        // The timestamp is the server's, never the caller's.
        let model = riwayat_pembayaran::ActiveModel {
            penyewa_id: Set(new.penyewa_id),
            tanggal_bayar: Set(Utc::now()),
            jumlah: Set(new.jumlah),
            keterangan: Set(new.keterangan),
            bukti_transfer: Set(new.bukti_transfer),
            ..Default::default()
        };
        let result = model.insert(&self.db).await?;
        info!(
            "Payment saved: id={} penyewa={} jumlah={}",
            result.id, tenant.nama_lengkap, result.jumlah
        );

        Ok(PaymentDetail {
            payment: payment_to_domain(result),
            penyewa_nama: tenant.nama_lengkap,
        })
    }

    async fn update(&self, id: i32, patch: PaymentPatch) -> DomainResult<PaymentDetail> {
        let existing = riwayat_pembayaran::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found("Riwayat pembayaran", id))?;

        // tanggal_bayar and penyewa_id are immutable.
        let model = riwayat_pembayaran::ActiveModel {
            id: Set(id),
            penyewa_id: Set(existing.penyewa_id),
            tanggal_bayar: Set(existing.tanggal_bayar),
            jumlah: Set(patch.jumlah.unwrap_or(existing.jumlah)),
            keterangan: Set(patch.keterangan.unwrap_or(existing.keterangan)),
            bukti_transfer: Set(patch.bukti_transfer.or(existing.bukti_transfer)),
        };
        let result = model.update(&self.db).await?;
        self.with_name(result).await
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = riwayat_pembayaran::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Riwayat pembayaran", id));
        }
        info!("Payment deleted: {}", id);
        Ok(())
    }
}
