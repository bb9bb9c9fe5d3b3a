use sea_query::Iden;

#[derive(Iden, Clone, Copy)]
pub enum FertilizationPlan {
    Table,
    Id,
    Estate,
    Category,
    Round,
    QuantityKg,
    AppliedOn,
}

#[derive(Iden, Clone, Copy)]
pub enum FertilizationActual {
    Table,
    Id,
    Estate,
    Category,
    Round,
    QuantityKg,
    AppliedOn,
}
