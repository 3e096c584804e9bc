//! SeaORM-backed implementations of the domain repository ports.
//!
//! Generic over `C: ConnectionTrait`, so either a `DatabaseConnection` or a
//! transaction can be plugged in.

use anyhow::Context;
use chrono::{NaiveDate, NaiveTime};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

use crate::contract::model::{Booking, MeetingRoom};
use crate::domain::repo::{BookingsRepository, RoomsRepository};
use crate::infra::storage::entity::{booking, meeting_room};
use crate::infra::storage::mapper::room_name_key;

pub struct SeaOrmRoomsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmRoomsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> RoomsRepository for SeaOrmRoomsRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<MeetingRoom>> {
        let found = meeting_room::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find room by id failed")?;
        Ok(found.map(Into::into))
    }

    async fn name_exists(&self, name: &str) -> anyhow::Result<bool> {
        let count = meeting_room::Entity::find()
            .filter(meeting_room::Column::NameKey.eq(room_name_key(name)))
            .count(&self.conn)
            .await
            .context("room name lookup failed")?;
        Ok(count > 0)
    }

    async fn insert(&self, room: MeetingRoom) -> anyhow::Result<()> {
        let m: meeting_room::ActiveModel = room.into();
        let _ = m.insert(&self.conn).await.context("insert room failed")?;
        Ok(())
    }

    async fn list(&self) -> anyhow::Result<Vec<MeetingRoom>> {
        let rows = meeting_room::Entity::find()
            .all(&self.conn)
            .await
            .context("list rooms failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        // Also done by the FK cascade; explicit so it holds without FK enforcement.
        booking::Entity::delete_many()
            .filter(booking::Column::MeetingRoomId.eq(id))
            .exec(&self.conn)
            .await
            .context("delete room bookings failed")?;
        let res = meeting_room::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("delete room failed")?;
        Ok(res.rows_affected > 0)
    }
}

pub struct SeaOrmBookingsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmBookingsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> BookingsRepository for SeaOrmBookingsRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Booking>> {
        let found = booking::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find booking by id failed")?;
        Ok(found.map(Into::into))
    }

    async fn overlap_exists(
        &self,
        meeting_room_id: Uuid,
        date: NaiveDate,
        time_from: NaiveTime,
        time_to: NaiveTime,
    ) -> anyhow::Result<bool> {
        let count = booking::Entity::find()
            .filter(booking::Column::MeetingRoomId.eq(meeting_room_id))
            .filter(booking::Column::Date.eq(date))
            .filter(booking::Column::TimeFrom.lt(time_to))
            .filter(booking::Column::TimeTo.gt(time_from))
            .count(&self.conn)
            .await
            .context("overlap query failed")?;
        Ok(count > 0)
    }

    async fn insert(&self, b: Booking) -> anyhow::Result<()> {
        let m: booking::ActiveModel = b.into();
        let _ = m.insert(&self.conn).await.context("insert booking failed")?;
        Ok(())
    }

    async fn list_for_room_and_date(
        &self,
        meeting_room_id: Uuid,
        date: NaiveDate,
    ) -> anyhow::Result<Vec<Booking>> {
        let rows = booking::Entity::find()
            .filter(booking::Column::MeetingRoomId.eq(meeting_room_id))
            .filter(booking::Column::Date.eq(date))
            .all(&self.conn)
            .await
            .context("list bookings failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let res = booking::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("delete booking failed")?;
        Ok(res.rows_affected > 0)
    }
}
