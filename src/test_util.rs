use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;

use diesel::r2d2::{ConnectionManager, CustomizeConnection};
use diesel::{Connection, ExpressionMethods, PgConnection, RunQueryDsl};
use r2d2::Pool;

use crate::schema::{characters, planets, users};
use crate::{db, DbPool};

/// An id no test ever inserts.
pub const MISSING_ID: i32 = i32::MAX;

static MIGRATE: Once = Once::new();
static SEQUENCE: AtomicUsize = AtomicUsize::new(0);

fn database_url() -> String {
    let _ = env_logger::builder().is_test(true).try_init();
    dotenvy::dotenv().ok();
    let url = env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
    MIGRATE.call_once(|| {
        let mut conn =
            PgConnection::establish(&url).expect("Couldn't connect to the test database.");
        db::run_migrations(&mut conn).expect("Failed to migrate the test database.");
    });
    url
}

/// Connection whose work is rolled back when it is dropped.
pub fn connection() -> PgConnection {
    let mut conn = committing_connection();
    conn.begin_test_transaction()
        .expect("Failed to begin test transaction.");
    conn
}

/// Plain connection. Whatever it writes stays, so callers clean up.
pub fn committing_connection() -> PgConnection {
    PgConnection::establish(&database_url()).expect("Couldn't connect to the test database.")
}

#[derive(Debug)]
struct TestTransaction;

impl CustomizeConnection<PgConnection, diesel::r2d2::Error> for TestTransaction {
    fn on_acquire(&self, conn: &mut PgConnection) -> Result<(), diesel::r2d2::Error> {
        conn.begin_test_transaction()
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Single connection pool, so every request of a test sees the same
/// uncommitted transaction.
pub fn pool() -> DbPool {
    Pool::builder()
        .max_size(1)
        .connection_customizer(Box::new(TestTransaction))
        .build(ConnectionManager::<PgConnection>::new(database_url()))
        .expect("Failed to create test pool.")
}

/// Pool that never opens a connection, for requests rejected before any
/// query runs.
pub fn unconnected_pool() -> DbPool {
    Pool::builder()
        .max_size(1)
        .build_unchecked(ConnectionManager::<PgConnection>::new(
            "postgres://unused@localhost/unused",
        ))
}

fn unique(name: &str) -> String {
    let n = SEQUENCE.fetch_add(1, Ordering::SeqCst);
    format!("{}.{}.{}", name, std::process::id(), n)
}

pub fn insert_user(conn: &mut PgConnection, username: &str) -> i32 {
    diesel::insert_into(users::table)
        .values((
            users::username.eq(username),
            users::email.eq(format!("{}@holocron.test", unique(username))),
            users::password.eq("may-the-force"),
            users::is_active.eq(true),
        ))
        .returning(users::id)
        .get_result(conn)
        .expect("Failed to insert user.")
}

pub fn insert_character(conn: &mut PgConnection, name: &str) -> i32 {
    diesel::insert_into(characters::table)
        .values((
            characters::name.eq(name),
            characters::birth_year.eq(Some("19BBY")),
            characters::gender.eq(None::<String>),
            characters::height.eq(172.0),
            characters::skin_color.eq("fair"),
            characters::hair_color.eq("brown"),
            characters::eye_color.eq("brown"),
            characters::description.eq(format!("{} of the galaxy", name)),
            characters::photo_url.eq("https://img.holocron.test/character.png"),
        ))
        .returning(characters::id)
        .get_result(conn)
        .expect("Failed to insert character.")
}

pub fn insert_planet(conn: &mut PgConnection, name: &str) -> i32 {
    diesel::insert_into(planets::table)
        .values((
            planets::name.eq(name),
            planets::climate.eq("temperate"),
            planets::terrain.eq("grasslands"),
            planets::population.eq(Some(2_000_000)),
            planets::orbital_period.eq(364.0),
            planets::rotation_period.eq(24.0),
            planets::diameter.eq(12500.0),
            planets::description.eq(format!("The planet {}", name)),
            planets::photo_url.eq("https://img.holocron.test/planet.png"),
        ))
        .returning(planets::id)
        .get_result(conn)
        .expect("Failed to insert planet.")
}
