mod fertilization_actual;
mod fertilization_plan;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "pupuk",
    "m0_1",
    vec_box![],
    vec_box![
        fertilization_plan::CreateTable,
        fertilization_plan::CreateCategoryIdx,
        fertilization_actual::CreateTable,
        fertilization_actual::CreateCategoryIdx,
    ]
);
