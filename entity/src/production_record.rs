use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "production_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub farm_id: i32,
    pub flock_id: i32,
    pub record_date: Date,
    pub mortality: i32,
    pub average_weight_kg: f64,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::flock::Entity",
        from = "Column::FlockId",
        to = "super::flock::Column::Id"
    )]
    Flock,
}

impl Related<super::flock::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flock.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
