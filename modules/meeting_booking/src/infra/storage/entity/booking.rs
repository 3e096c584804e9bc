use chrono::{NaiveDate, NaiveTime};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub meeting_room_id: Uuid,
    pub employee_email: String,
    pub date: NaiveDate,
    pub time_from: NaiveTime,
    pub time_to: NaiveTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::meeting_room::Entity",
        from = "Column::MeetingRoomId",
        to = "super::meeting_room::Column::Id",
        on_delete = "Cascade"
    )]
    MeetingRoom,
}

impl Related<super::meeting_room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MeetingRoom.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
