use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expense")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub farm_id: i32,
    pub flock_id: Option<i32>,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub expense_date: Date,
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

impl ActiveModelBehavior for ActiveModel {}
