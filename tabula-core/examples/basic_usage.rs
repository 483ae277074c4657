use tabula_core::{table, BindStyle, Options, QueryBuilder, Schema};

#[derive(Schema)]
#[allow(dead_code)]
struct Timestamps {
    #[tag(db = "created_at")]
    created_at: String,
    #[tag(db = "deleted_at")]
    deleted_at: Option<String>,
}

#[derive(Schema)]
#[allow(dead_code)]
struct User {
    #[tag(dbtable = "users", db = "id,pkey")]
    id: i64,
    #[tag(db = "name")]
    name: String,
    #[tag(db = "email")]
    email: String,
    #[schema(embed)]
    timestamps: Timestamps,
}

fn main() -> Result<(), tabula_core::Error> {
    // From an explicit column list
    let users = table("users", ["id", "name", "email", "created_at", "deleted_at"]);
    println!("SELECT SQL: {}", users.select());
    println!("SELECT BY SQL: {}", users.select_by(("email", "name")));
    println!("INSERT SQL: {}", users.insert());
    println!("UPDATE SQL: {}", users.update());
    println!("SOFT DELETE SQL: {}", users.delete());
    println!("HARD DELETE SQL: {}", users.hard_delete());

    // From a tagged struct, for a driver using `?` placeholders
    let options = Options::new().bind_style(BindStyle::Question);
    let qb = QueryBuilder::from_schema::<User>(&options)?;
    println!("INSERT RETURNING SQL: {}", qb.insert_returning());
    println!("NAMED INSERT SQL: {}", qb.named_insert());
    println!("NAMED UPDATE SQL: {}", qb.named_update());

    // Including soft deleted rows
    let all = qb.with_soft_deleted(true);
    println!("SELECT ALL SQL: {}", all.select_all());

    Ok(())
}
