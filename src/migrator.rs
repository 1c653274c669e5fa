use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_putwall_table::Migration),
            Box::new(m20240101_000002_create_replenishment_table::Migration),
            Box::new(m20240101_000003_create_unitsort_table::Migration),
            Box::new(m20240101_000004_create_pickdetail_table::Migration),
        ]
    }
}

// Migration implementations

mod m20240101_000001_create_putwall_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_putwall_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Putwall::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Putwall::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Putwall::Zone).string().null())
                        .col(ColumnDef::new(Putwall::Cubby).string().null())
                        .col(ColumnDef::new(Putwall::PackSideColor).string().null())
                        .col(ColumnDef::new(Putwall::LocationId).string().null())
                        .col(ColumnDef::new(Putwall::ItemNumber).string().null())
                        .col(ColumnDef::new(Putwall::ContainerId).string().null())
                        .col(ColumnDef::new(Putwall::HuId).string().null())
                        .col(ColumnDef::new(Putwall::StoLocation).string().null())
                        .col(ColumnDef::new(Putwall::Status).string().null())
                        .col(ColumnDef::new(Putwall::OrderNumber).string().null())
                        .col(ColumnDef::new(Putwall::Priority).integer().null())
                        .col(ColumnDef::new(Putwall::ReplnPickLocaion).string().null())
                        .col(ColumnDef::new(Putwall::PickLocation).string().null())
                        .col(ColumnDef::new(Putwall::WorkType).string().null())
                        .col(ColumnDef::new(Putwall::PickId).string().null())
                        .col(ColumnDef::new(Putwall::Kind).string().null())
                        .col(ColumnDef::new(Putwall::LocationGroup).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_putwall_cubby")
                        .table(Putwall::Table)
                        .col(Putwall::Cubby)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_putwall_zone")
                        .table(Putwall::Table)
                        .col(Putwall::Zone)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Putwall::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Putwall {
        Table,
        Id,
        Zone,
        Cubby,
        PackSideColor,
        LocationId,
        ItemNumber,
        ContainerId,
        HuId,
        StoLocation,
        Status,
        OrderNumber,
        Priority,
        ReplnPickLocaion,
        PickLocation,
        WorkType,
        PickId,
        #[sea_orm(iden = "type")]
        Kind,
        LocationGroup,
    }
}

mod m20240101_000002_create_replenishment_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_replenishment_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Replenishment::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Replenishment::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Replenishment::PackLane).string().null())
                        .col(ColumnDef::new(Replenishment::ReplenQty).big_integer().null())
                        .col(ColumnDef::new(Replenishment::DemandQty).big_integer().null())
                        .col(ColumnDef::new(Replenishment::WorkQId).string().null())
                        .col(ColumnDef::new(Replenishment::WorkType).string().null())
                        .col(ColumnDef::new(Replenishment::Description).string().null())
                        .col(ColumnDef::new(Replenishment::PickRefNumber).string().null())
                        .col(ColumnDef::new(Replenishment::Priority).string().null())
                        .col(ColumnDef::new(Replenishment::DateDue).string().null())
                        .col(ColumnDef::new(Replenishment::TimeDue).string().null())
                        .col(ColumnDef::new(Replenishment::ItemNumber).string().null())
                        .col(ColumnDef::new(Replenishment::WhId).string().null())
                        .col(ColumnDef::new(Replenishment::LocationId).string().null())
                        .col(ColumnDef::new(Replenishment::FromLocationId).string().null())
                        .col(ColumnDef::new(Replenishment::WorkStatus).string().null())
                        .col(ColumnDef::new(Replenishment::Qty).big_integer().null())
                        .col(ColumnDef::new(Replenishment::WorkersRequired).integer().null())
                        .col(ColumnDef::new(Replenishment::WorkersAssigned).integer().null())
                        .col(ColumnDef::new(Replenishment::Zone).string().null())
                        .col(ColumnDef::new(Replenishment::EmployeeId).string().null())
                        .col(ColumnDef::new(Replenishment::PriorityOverridden).boolean().null())
                        .col(ColumnDef::new(Replenishment::DatetimeStamp).string().null())
                        .col(ColumnDef::new(Replenishment::SubType).string().null())
                        .col(ColumnDef::new(Replenishment::WaveId).string().null())
                        .col(ColumnDef::new(Replenishment::ReplenArea).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_replenishment_pack_lane")
                        .table(Replenishment::Table)
                        .col(Replenishment::PackLane)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Replenishment::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Replenishment {
        Table,
        Id,
        PackLane,
        ReplenQty,
        DemandQty,
        WorkQId,
        WorkType,
        Description,
        PickRefNumber,
        Priority,
        DateDue,
        TimeDue,
        ItemNumber,
        WhId,
        LocationId,
        FromLocationId,
        WorkStatus,
        Qty,
        WorkersRequired,
        WorkersAssigned,
        Zone,
        EmployeeId,
        PriorityOverridden,
        DatetimeStamp,
        SubType,
        WaveId,
        ReplenArea,
    }
}

mod m20240101_000003_create_unitsort_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000003_create_unitsort_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Unitsort::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Unitsort::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Unitsort::ContainerId).string().null())
                        .col(ColumnDef::new(Unitsort::Packlane).string().null())
                        .col(ColumnDef::new(Unitsort::ItemCount).big_integer().null())
                        .col(ColumnDef::new(Unitsort::OrderDate).string().null())
                        .col(ColumnDef::new(Unitsort::Released).big_integer().null())
                        .col(ColumnDef::new(Unitsort::Picked).big_integer().null())
                        .col(ColumnDef::new(Unitsort::AllocatedPicks).big_integer().null())
                        .col(ColumnDef::new(Unitsort::UnallocatedPicks).big_integer().null())
                        .col(
                            ColumnDef::new(Unitsort::ReplenItemNumbersCount)
                                .big_integer()
                                .null(),
                        )
                        .col(ColumnDef::new(Unitsort::PickItems).text().null())
                        .col(ColumnDef::new(Unitsort::ReplenTaskItemNumbers).text().null())
                        .col(ColumnDef::new(Unitsort::ReplenPriorities).text().null())
                        .col(ColumnDef::new(Unitsort::ReplenWorkStatus).text().null())
                        .col(ColumnDef::new(Unitsort::LocationId).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_unitsort_container_id")
                        .table(Unitsort::Table)
                        .col(Unitsort::ContainerId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Unitsort::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Unitsort {
        Table,
        Id,
        ContainerId,
        Packlane,
        ItemCount,
        OrderDate,
        #[sea_orm(iden = "RELEASED")]
        Released,
        #[sea_orm(iden = "PICKED")]
        Picked,
        AllocatedPicks,
        UnallocatedPicks,
        ReplenItemNumbersCount,
        PickItems,
        ReplenTaskItemNumbers,
        ReplenPriorities,
        ReplenWorkStatus,
        LocationId,
    }
}

mod m20240101_000004_create_pickdetail_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000004_create_pickdetail_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(PickDetail::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PickDetail::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(PickDetail::ContainerId).string().null())
                        .col(ColumnDef::new(PickDetail::OrderNumber).string().null())
                        .col(ColumnDef::new(PickDetail::Status).string().null())
                        .col(ColumnDef::new(PickDetail::ItemNumber).string().null())
                        .col(ColumnDef::new(PickDetail::PickArea).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_pickdetail_container_id")
                        .table(PickDetail::Table)
                        .col(PickDetail::ContainerId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(PickDetail::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum PickDetail {
        #[sea_orm(iden = "pickdetail")]
        Table,
        Id,
        ContainerId,
        OrderNumber,
        Status,
        ItemNumber,
        PickArea,
    }
}
