use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "flock")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub farm_id: i32,
    pub name: String,
    pub breed: String,
    pub batch_code: String,
    pub bird_count: i32,
    pub acquired_at: Date,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::farm::Entity",
        from = "Column::FarmId",
        to = "super::farm::Column::Id"
    )]
    Farm,
    #[sea_orm(has_many = "super::egg_production::Entity")]
    EggProduction,
    #[sea_orm(has_many = "super::feed_usage::Entity")]
    FeedUsage,
    #[sea_orm(has_many = "super::production_record::Entity")]
    ProductionRecord,
}

impl Related<super::egg_production::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EggProduction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
