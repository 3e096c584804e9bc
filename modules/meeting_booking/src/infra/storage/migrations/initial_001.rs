use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250101_000001_meeting_booking_initial"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MeetingRooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MeetingRooms::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MeetingRooms::Name).string().not_null())
                    .col(
                        ColumnDef::new(MeetingRooms::NameKey)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Bookings::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Bookings::MeetingRoomId).uuid().not_null())
                    .col(ColumnDef::new(Bookings::EmployeeEmail).string().not_null())
                    .col(ColumnDef::new(Bookings::Date).date().not_null())
                    .col(ColumnDef::new(Bookings::TimeFrom).time().not_null())
                    .col(ColumnDef::new(Bookings::TimeTo).time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_meeting_room")
                            .from(Bookings::Table, Bookings::MeetingRoomId)
                            .to(MeetingRooms::Table, MeetingRooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_bookings_room_date")
                    .table(Bookings::Table)
                    .col(Bookings::MeetingRoomId)
                    .col(Bookings::Date)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MeetingRooms::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MeetingRooms {
    Table,
    Id,
    Name,
    NameKey,
}

#[derive(DeriveIden)]
enum Bookings {
    Table,
    Id,
    MeetingRoomId,
    EmployeeEmail,
    Date,
    TimeFrom,
    TimeTo,
}
