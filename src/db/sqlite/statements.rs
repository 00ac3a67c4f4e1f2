//! The statement catalog: one named, parameterized statement per use case.
//!
//! Placeholders are numbered (`?1`, `?2`, ...) and the k-th entry of
//! `params` names placeholder `?k`, so a statement is bound from a
//! name → value mapping. A placeholder may appear several times in the SQL;
//! search statements reuse `?1` for the pattern in every column.

/// What a statement does, which decides what the executor reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// Returns rows.
    Query,
    /// Inserts one row; reports the last inserted row id.
    Insert,
    /// Updates, deletes or upserts; reports affected rows.
    Mutation,
}

impl StatementKind {
    pub fn is_mutation(self) -> bool {
        !matches!(self, StatementKind::Query)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statement {
    pub name: &'static str,
    pub sql: &'static str,
    pub params: &'static [&'static str],
    pub kind: StatementKind,
}

const fn query(name: &'static str, sql: &'static str, params: &'static [&'static str]) -> Statement {
    Statement {
        name,
        sql,
        params,
        kind: StatementKind::Query,
    }
}

const fn insert(name: &'static str, sql: &'static str, params: &'static [&'static str]) -> Statement {
    Statement {
        name,
        sql,
        params,
        kind: StatementKind::Insert,
    }
}

const fn mutation(
    name: &'static str,
    sql: &'static str,
    params: &'static [&'static str],
) -> Statement {
    Statement {
        name,
        sql,
        params,
        kind: StatementKind::Mutation,
    }
}

const PAGE: &[&str] = &["limit", "offset"];
const SEARCH: &[&str] = &["query", "limit", "offset"];
const ID: &[&str] = &["id"];
const NONE: &[&str] = &[];

// =============================================================================
// Person
// =============================================================================

pub mod person {
    use super::*;

    /// New people are always customers.
    pub const CREATE: Statement = insert(
        "person.create",
        "INSERT INTO person (username, first_name, last_name, email, phone_number, is_employee, hashed_password) \
         VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6)",
        &["username", "first_name", "last_name", "email", "phone_number", "hashed_password"],
    );

    pub const UPSERT: Statement = mutation(
        "person.upsert",
        "INSERT INTO person (id, username, first_name, last_name, email, phone_number, is_employee, hashed_password) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) \
         ON CONFLICT(id) DO UPDATE SET \
             username = excluded.username, \
             first_name = excluded.first_name, \
             last_name = excluded.last_name, \
             email = excluded.email, \
             phone_number = excluded.phone_number, \
             is_employee = excluded.is_employee, \
             hashed_password = excluded.hashed_password",
        &[
            "id",
            "username",
            "first_name",
            "last_name",
            "email",
            "phone_number",
            "is_employee",
            "hashed_password",
        ],
    );

    /// The admin row already existing is not an error.
    pub const SEED_ADMIN: Statement = mutation(
        "person.seed_admin",
        "INSERT INTO person (id, username, first_name, last_name, email, phone_number, is_employee, hashed_password) \
         VALUES (?1, 'admin', 'Admin', 'User', 'admin@example.com', '123-456-7890', 1, ?2) \
         ON CONFLICT DO NOTHING",
        &["id", "hashed_password"],
    );

    pub const DELETE: Statement = mutation("person.delete", "DELETE FROM person WHERE id = ?1", ID);

    pub const GET_BY_ID: Statement =
        query("person.get_by_id", "SELECT * FROM person WHERE id = ?1", ID);

    pub const GET_BY_USERNAME: Statement = query(
        "person.get_by_username",
        "SELECT * FROM person WHERE username = ?1",
        &["username"],
    );

    pub const GET_BY_EMAIL: Statement = query(
        "person.get_by_email",
        "SELECT * FROM person WHERE email = ?1",
        &["email"],
    );

    pub const LOGIN: Statement = query(
        "person.login",
        "SELECT * FROM person WHERE username = ?1 AND hashed_password = ?2",
        &["username", "hashed_password"],
    );

    pub const SET_ROLE: Statement = mutation(
        "person.set_role",
        "UPDATE person SET is_employee = ?1 WHERE id = ?2",
        &["is_employee", "id"],
    );

    pub const COUNT: Statement =
        query("person.count", "SELECT COUNT(*) AS count FROM person", NONE);

    pub const COUNT_BY_ROLE: Statement = query(
        "person.count_by_role",
        "SELECT COUNT(*) AS count FROM person WHERE is_employee = ?1",
        &["is_employee"],
    );

    pub const PAGE: Statement = query(
        "person.page",
        "SELECT * FROM person ORDER BY id LIMIT ?1 OFFSET ?2",
        super::PAGE,
    );

    pub const PAGE_BY_ROLE: Statement = query(
        "person.page_by_role",
        "SELECT * FROM person WHERE is_employee = ?1 ORDER BY id LIMIT ?2 OFFSET ?3",
        &["is_employee", "limit", "offset"],
    );

    pub const SEARCH: Statement = query(
        "person.search",
        "SELECT * FROM person \
         WHERE username LIKE ?1 ESCAPE '\\' \
            OR first_name LIKE ?1 ESCAPE '\\' \
            OR last_name LIKE ?1 ESCAPE '\\' \
            OR email LIKE ?1 ESCAPE '\\' \
            OR phone_number LIKE ?1 ESCAPE '\\' \
         ORDER BY id LIMIT ?2 OFFSET ?3",
        super::SEARCH,
    );
}

// =============================================================================
// Property
// =============================================================================

pub mod property {
    use super::*;

    pub const CREATE: Statement = insert(
        "property.create",
        "INSERT INTO property (street_address, city, state, post_code) VALUES (?1, ?2, ?3, ?4)",
        &["street_address", "city", "state", "post_code"],
    );

    pub const UPSERT: Statement = mutation(
        "property.upsert",
        "INSERT INTO property (id, street_address, city, state, post_code) \
         VALUES (?1, ?2, ?3, ?4, ?5) \
         ON CONFLICT(id) DO UPDATE SET \
             street_address = excluded.street_address, \
             city = excluded.city, \
             state = excluded.state, \
             post_code = excluded.post_code",
        &["id", "street_address", "city", "state", "post_code"],
    );

    pub const DELETE: Statement =
        mutation("property.delete", "DELETE FROM property WHERE id = ?1", ID);

    pub const GET_BY_ID: Statement =
        query("property.get_by_id", "SELECT * FROM property WHERE id = ?1", ID);

    pub const GET_BY_ADDRESS: Statement = query(
        "property.get_by_address",
        "SELECT * FROM property WHERE street_address = ?1 ORDER BY id",
        &["street_address"],
    );

    pub const COUNT: Statement =
        query("property.count", "SELECT COUNT(*) AS count FROM property", NONE);

    pub const PAGE: Statement = query(
        "property.page",
        "SELECT * FROM property ORDER BY id LIMIT ?1 OFFSET ?2",
        super::PAGE,
    );

    pub const SEARCH: Statement = query(
        "property.search",
        "SELECT * FROM property \
         WHERE street_address LIKE ?1 ESCAPE '\\' \
            OR city LIKE ?1 ESCAPE '\\' \
            OR state LIKE ?1 ESCAPE '\\' \
            OR post_code LIKE ?1 ESCAPE '\\' \
         ORDER BY id LIMIT ?2 OFFSET ?3",
        super::SEARCH,
    );
}

// =============================================================================
// Booking
// =============================================================================

pub mod booking {
    use super::*;

    pub const CREATE: Statement = insert(
        "booking.create",
        "INSERT INTO booking (person_id, property_id, booking_date) VALUES (?1, ?2, ?3)",
        &["person_id", "property_id", "booking_date"],
    );

    pub const UPSERT: Statement = mutation(
        "booking.upsert",
        "INSERT INTO booking (id, person_id, property_id, booking_date) \
         VALUES (?1, ?2, ?3, ?4) \
         ON CONFLICT(id) DO UPDATE SET \
             person_id = excluded.person_id, \
             property_id = excluded.property_id, \
             booking_date = excluded.booking_date",
        &["id", "person_id", "property_id", "booking_date"],
    );

    pub const DELETE: Statement =
        mutation("booking.delete", "DELETE FROM booking WHERE id = ?1", ID);

    pub const GET_BY_ID: Statement =
        query("booking.get_by_id", "SELECT * FROM booking WHERE id = ?1", ID);

    pub const LIST_BY_PERSON: Statement = query(
        "booking.list_by_person",
        "SELECT * FROM booking WHERE person_id = ?1 ORDER BY id",
        &["person_id"],
    );

    pub const LIST_BY_PROPERTY: Statement = query(
        "booking.list_by_property",
        "SELECT * FROM booking WHERE property_id = ?1 ORDER BY id",
        &["property_id"],
    );

    pub const COUNT_BY_PERSON: Statement = query(
        "booking.count_by_person",
        "SELECT COUNT(*) AS count FROM booking WHERE person_id = ?1",
        &["person_id"],
    );

    pub const COUNT_BY_PROPERTY: Statement = query(
        "booking.count_by_property",
        "SELECT COUNT(*) AS count FROM booking WHERE property_id = ?1",
        &["property_id"],
    );

    /// Inclusive on both ends.
    pub const LIST_BETWEEN: Statement = query(
        "booking.list_between",
        "SELECT * FROM booking WHERE booking_date BETWEEN ?1 AND ?2 ORDER BY booking_date, id",
        &["from", "to"],
    );

    pub const LIST_UNCOMPLETED_BY_PERSON: Statement = query(
        "booking.list_uncompleted_by_person",
        "SELECT * FROM booking \
         WHERE person_id = ?1 \
           AND id IN (SELECT booking_id FROM booking_service WHERE completed = 0) \
         ORDER BY id",
        &["person_id"],
    );

    pub const LIST_UNCOMPLETED: Statement = query(
        "booking.list_uncompleted",
        "SELECT * FROM booking \
         WHERE id IN (SELECT booking_id FROM booking_service WHERE completed = 0) \
         ORDER BY id",
        NONE,
    );

    pub const COUNT_UNCOMPLETED: Statement = query(
        "booking.count_uncompleted",
        "SELECT COUNT(*) AS count FROM booking \
         WHERE id IN (SELECT booking_id FROM booking_service WHERE completed = 0)",
        NONE,
    );

    pub const COUNT: Statement =
        query("booking.count", "SELECT COUNT(*) AS count FROM booking", NONE);

    pub const PAGE: Statement = query(
        "booking.page",
        "SELECT * FROM booking ORDER BY id LIMIT ?1 OFFSET ?2",
        super::PAGE,
    );

    /// Matches the booking date as well as the customer's and the property's
    /// text columns.
    pub const SEARCH: Statement = query(
        "booking.search",
        "SELECT b.* FROM booking b \
         JOIN person p ON p.id = b.person_id \
         JOIN property pr ON pr.id = b.property_id \
         WHERE b.booking_date LIKE ?1 ESCAPE '\\' \
            OR p.first_name LIKE ?1 ESCAPE '\\' \
            OR p.last_name LIKE ?1 ESCAPE '\\' \
            OR p.email LIKE ?1 ESCAPE '\\' \
            OR p.phone_number LIKE ?1 ESCAPE '\\' \
            OR pr.street_address LIKE ?1 ESCAPE '\\' \
            OR pr.city LIKE ?1 ESCAPE '\\' \
            OR pr.state LIKE ?1 ESCAPE '\\' \
            OR pr.post_code LIKE ?1 ESCAPE '\\' \
         ORDER BY b.id LIMIT ?2 OFFSET ?3",
        super::SEARCH,
    );

    /// Sum of the prices of every service on the booking; 0.0 when none.
    /// `found` is 0 when the booking does not exist.
    pub const COST: Statement = query(
        "booking.cost",
        "SELECT \
             (SELECT COUNT(*) FROM booking WHERE id = ?1) AS found, \
             (SELECT TOTAL(s.price) FROM booking_service bs \
                  JOIN service s ON s.id = bs.service_id \
              WHERE bs.booking_id = ?1) AS cost",
        &["booking_id"],
    );

    pub const COMPLETION: Statement = query(
        "booking.completion",
        "SELECT \
             (SELECT COUNT(*) FROM booking WHERE id = ?1) AS found, \
             COUNT(*) AS total, COALESCE(SUM(completed), 0) AS completed \
         FROM booking_service WHERE booking_id = ?1",
        &["booking_id"],
    );
}

// =============================================================================
// Service
// =============================================================================

pub mod service {
    use super::*;

    pub const CREATE: Statement = insert(
        "service.create",
        "INSERT INTO service (id, description, price) VALUES (?1, ?2, ?3)",
        &["id", "description", "price"],
    );

    pub const UPSERT: Statement = mutation(
        "service.upsert",
        "INSERT INTO service (id, description, price) VALUES (?1, ?2, ?3) \
         ON CONFLICT(id) DO UPDATE SET \
             description = excluded.description, \
             price = excluded.price",
        &["id", "description", "price"],
    );

    pub const DELETE: Statement =
        mutation("service.delete", "DELETE FROM service WHERE id = ?1", ID);

    pub const GET_BY_ID: Statement =
        query("service.get_by_id", "SELECT * FROM service WHERE id = ?1", ID);

    pub const COUNT: Statement =
        query("service.count", "SELECT COUNT(*) AS count FROM service", NONE);

    pub const PAGE: Statement = query(
        "service.page",
        "SELECT * FROM service ORDER BY id LIMIT ?1 OFFSET ?2",
        super::PAGE,
    );

    pub const SEARCH: Statement = query(
        "service.search",
        "SELECT * FROM service \
         WHERE id LIKE ?1 ESCAPE '\\' \
            OR description LIKE ?1 ESCAPE '\\' \
         ORDER BY id LIMIT ?2 OFFSET ?3",
        super::SEARCH,
    );
}

// =============================================================================
// BookingService
// =============================================================================

pub mod booking_service {
    use super::*;

    pub const CREATE: Statement = insert(
        "booking_service.create",
        "INSERT INTO booking_service (booking_id, service_id, duration, completed) \
         VALUES (?1, ?2, ?3, ?4)",
        &["booking_id", "service_id", "duration", "completed"],
    );

    pub const UPSERT: Statement = mutation(
        "booking_service.upsert",
        "INSERT INTO booking_service (id, booking_id, service_id, duration, completed) \
         VALUES (?1, ?2, ?3, ?4, ?5) \
         ON CONFLICT(id) DO UPDATE SET \
             booking_id = excluded.booking_id, \
             service_id = excluded.service_id, \
             duration = excluded.duration, \
             completed = excluded.completed",
        &["id", "booking_id", "service_id", "duration", "completed"],
    );

    pub const DELETE: Statement = mutation(
        "booking_service.delete",
        "DELETE FROM booking_service WHERE id = ?1",
        ID,
    );

    pub const REMOVE: Statement = mutation(
        "booking_service.remove",
        "DELETE FROM booking_service WHERE booking_id = ?1 AND service_id = ?2",
        &["booking_id", "service_id"],
    );

    pub const REMOVE_ALL_FOR_BOOKING: Statement = mutation(
        "booking_service.remove_all_for_booking",
        "DELETE FROM booking_service WHERE booking_id = ?1",
        &["booking_id"],
    );

    pub const GET_BY_ID: Statement = query(
        "booking_service.get_by_id",
        "SELECT * FROM booking_service WHERE id = ?1",
        ID,
    );

    pub const FIND: Statement = query(
        "booking_service.find",
        "SELECT * FROM booking_service WHERE booking_id = ?1 AND service_id = ?2 \
         ORDER BY id LIMIT 1",
        &["booking_id", "service_id"],
    );

    pub const LIST_BY_BOOKING: Statement = query(
        "booking_service.list_by_booking",
        "SELECT * FROM booking_service WHERE booking_id = ?1 ORDER BY id",
        &["booking_id"],
    );

    pub const LIST_BY_SERVICE: Statement = query(
        "booking_service.list_by_service",
        "SELECT * FROM booking_service WHERE service_id = ?1 ORDER BY id",
        &["service_id"],
    );

    pub const COUNT_BY_BOOKING: Statement = query(
        "booking_service.count_by_booking",
        "SELECT COUNT(*) AS count FROM booking_service WHERE booking_id = ?1",
        &["booking_id"],
    );

    pub const PAGE_BY_BOOKING: Statement = query(
        "booking_service.page_by_booking",
        "SELECT * FROM booking_service WHERE booking_id = ?1 ORDER BY id LIMIT ?2 OFFSET ?3",
        &["booking_id", "limit", "offset"],
    );

    pub const SEARCH_BY_BOOKING: Statement = query(
        "booking_service.search_by_booking",
        "SELECT bs.* FROM booking_service bs \
         JOIN service s ON s.id = bs.service_id \
         WHERE bs.booking_id = ?1 \
           AND (bs.service_id LIKE ?2 ESCAPE '\\' OR s.description LIKE ?2 ESCAPE '\\') \
         ORDER BY bs.id LIMIT ?3 OFFSET ?4",
        &["booking_id", "query", "limit", "offset"],
    );

    pub const SET_COMPLETED: Statement = mutation(
        "booking_service.set_completed",
        "UPDATE booking_service SET completed = ?1 WHERE id = ?2",
        &["completed", "id"],
    );

    pub const TOGGLE_COMPLETED: Statement = mutation(
        "booking_service.toggle_completed",
        "UPDATE booking_service SET completed = 1 - completed WHERE id = ?1",
        ID,
    );

    pub const COUNT: Statement = query(
        "booking_service.count",
        "SELECT COUNT(*) AS count FROM booking_service",
        NONE,
    );

    pub const PAGE: Statement = query(
        "booking_service.page",
        "SELECT * FROM booking_service ORDER BY id LIMIT ?1 OFFSET ?2",
        super::PAGE,
    );
}

// =============================================================================
// Payment
// =============================================================================

pub mod payment {
    use super::*;

    pub const CREATE: Statement = insert(
        "payment.create",
        "INSERT INTO payment (booking_id, amount, payment_date) VALUES (?1, ?2, ?3)",
        &["booking_id", "amount", "payment_date"],
    );

    pub const UPSERT: Statement = mutation(
        "payment.upsert",
        "INSERT INTO payment (id, booking_id, amount, payment_date) \
         VALUES (?1, ?2, ?3, ?4) \
         ON CONFLICT(id) DO UPDATE SET \
             booking_id = excluded.booking_id, \
             amount = excluded.amount, \
             payment_date = excluded.payment_date",
        &["id", "booking_id", "amount", "payment_date"],
    );

    pub const DELETE: Statement =
        mutation("payment.delete", "DELETE FROM payment WHERE id = ?1", ID);

    pub const GET_BY_ID: Statement =
        query("payment.get_by_id", "SELECT * FROM payment WHERE id = ?1", ID);

    pub const LIST_BY_BOOKING: Statement = query(
        "payment.list_by_booking",
        "SELECT * FROM payment WHERE booking_id = ?1 ORDER BY id",
        &["booking_id"],
    );

    pub const LIST_BY_PERSON: Statement = query(
        "payment.list_by_person",
        "SELECT * FROM payment \
         WHERE booking_id IN (SELECT id FROM booking WHERE person_id = ?1) \
         ORDER BY id",
        &["person_id"],
    );

    pub const LIST_BY_PROPERTY: Statement = query(
        "payment.list_by_property",
        "SELECT * FROM payment \
         WHERE booking_id IN (SELECT id FROM booking WHERE property_id = ?1) \
         ORDER BY id",
        &["property_id"],
    );

    pub const TOTAL_FOR_BOOKING: Statement = query(
        "payment.total_for_booking",
        "SELECT TOTAL(amount) AS total FROM payment WHERE booking_id = ?1",
        &["booking_id"],
    );

    pub const COUNT_FOR_BOOKING: Statement = query(
        "payment.count_for_booking",
        "SELECT COUNT(*) AS count FROM payment WHERE booking_id = ?1",
        &["booking_id"],
    );

    /// Paid total, payment count and owed cost in one row; `found` is 0
    /// when the booking does not exist.
    pub const PROGRESS: Statement = query(
        "payment.progress",
        "SELECT \
             (SELECT COUNT(*) FROM booking WHERE id = ?1) AS found, \
             (SELECT TOTAL(amount) FROM payment WHERE booking_id = ?1) AS paid, \
             (SELECT COUNT(*) FROM payment WHERE booking_id = ?1) AS payments, \
             (SELECT TOTAL(s.price) FROM booking_service bs \
                  JOIN service s ON s.id = bs.service_id \
              WHERE bs.booking_id = ?1) AS cost",
        &["booking_id"],
    );

    pub const COUNT: Statement =
        query("payment.count", "SELECT COUNT(*) AS count FROM payment", NONE);

    pub const PAGE: Statement = query(
        "payment.page",
        "SELECT * FROM payment ORDER BY id LIMIT ?1 OFFSET ?2",
        super::PAGE,
    );

    pub const SEARCH: Statement = query(
        "payment.search",
        "SELECT * FROM payment \
         WHERE CAST(amount AS TEXT) LIKE ?1 ESCAPE '\\' \
            OR payment_date LIKE ?1 ESCAPE '\\' \
         ORDER BY id LIMIT ?2 OFFSET ?3",
        super::SEARCH,
    );
}

// =============================================================================
// Roster
// =============================================================================

pub mod roster {
    use super::*;

    pub const CREATE: Statement = insert(
        "roster.create",
        "INSERT INTO roster (person_id, booking_service_id) VALUES (?1, ?2)",
        &["person_id", "booking_service_id"],
    );

    pub const UPSERT: Statement = mutation(
        "roster.upsert",
        "INSERT INTO roster (id, person_id, booking_service_id) VALUES (?1, ?2, ?3) \
         ON CONFLICT(id) DO UPDATE SET \
             person_id = excluded.person_id, \
             booking_service_id = excluded.booking_service_id",
        &["id", "person_id", "booking_service_id"],
    );

    pub const DELETE: Statement =
        mutation("roster.delete", "DELETE FROM roster WHERE id = ?1", ID);

    pub const REMOVE: Statement = mutation(
        "roster.remove",
        "DELETE FROM roster WHERE person_id = ?1 AND booking_service_id = ?2",
        &["person_id", "booking_service_id"],
    );

    pub const GET_BY_ID: Statement =
        query("roster.get_by_id", "SELECT * FROM roster WHERE id = ?1", ID);

    pub const LIST_BY_BOOKING_SERVICE: Statement = query(
        "roster.list_by_booking_service",
        "SELECT * FROM roster WHERE booking_service_id = ?1 ORDER BY id",
        &["booking_service_id"],
    );

    pub const LIST_BY_PERSON: Statement = query(
        "roster.list_by_person",
        "SELECT * FROM roster WHERE person_id = ?1 ORDER BY id",
        &["person_id"],
    );

    pub const COUNT_BY_BOOKING_SERVICE: Statement = query(
        "roster.count_by_booking_service",
        "SELECT COUNT(*) AS count FROM roster WHERE booking_service_id = ?1",
        &["booking_service_id"],
    );

    pub const COUNT_BY_PERSON: Statement = query(
        "roster.count_by_person",
        "SELECT COUNT(*) AS count FROM roster WHERE person_id = ?1",
        &["person_id"],
    );

    pub const PAGE_BY_BOOKING_SERVICE: Statement = query(
        "roster.page_by_booking_service",
        "SELECT * FROM roster WHERE booking_service_id = ?1 ORDER BY id LIMIT ?2 OFFSET ?3",
        &["booking_service_id", "limit", "offset"],
    );

    pub const PAGE_BY_PERSON: Statement = query(
        "roster.page_by_person",
        "SELECT * FROM roster WHERE person_id = ?1 ORDER BY id LIMIT ?2 OFFSET ?3",
        &["person_id", "limit", "offset"],
    );

    pub const COUNT: Statement =
        query("roster.count", "SELECT COUNT(*) AS count FROM roster", NONE);

    pub const PAGE: Statement = query(
        "roster.page",
        "SELECT * FROM roster ORDER BY id LIMIT ?1 OFFSET ?2",
        super::PAGE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Highest `?N` placeholder in a statement.
    fn max_placeholder(sql: &str) -> usize {
        let bytes = sql.as_bytes();
        let mut max = 0;
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'?' {
                let start = i + 1;
                let mut end = start;
                while end < bytes.len() && bytes[end].is_ascii_digit() {
                    end += 1;
                }
                if let Ok(n) = sql[start..end].parse::<usize>() {
                    max = max.max(n);
                }
                i = end;
            } else {
                i += 1;
            }
        }
        max
    }

    fn catalog() -> Vec<Statement> {
        vec![
            person::CREATE,
            person::UPSERT,
            person::SEED_ADMIN,
            person::DELETE,
            person::GET_BY_ID,
            person::GET_BY_USERNAME,
            person::GET_BY_EMAIL,
            person::LOGIN,
            person::SET_ROLE,
            person::COUNT,
            person::COUNT_BY_ROLE,
            person::PAGE,
            person::PAGE_BY_ROLE,
            person::SEARCH,
            property::CREATE,
            property::UPSERT,
            property::DELETE,
            property::GET_BY_ID,
            property::GET_BY_ADDRESS,
            property::COUNT,
            property::PAGE,
            property::SEARCH,
            booking::CREATE,
            booking::UPSERT,
            booking::DELETE,
            booking::GET_BY_ID,
            booking::LIST_BY_PERSON,
            booking::LIST_BY_PROPERTY,
            booking::COUNT_BY_PERSON,
            booking::COUNT_BY_PROPERTY,
            booking::LIST_BETWEEN,
            booking::LIST_UNCOMPLETED,
            booking::LIST_UNCOMPLETED_BY_PERSON,
            booking::COUNT_UNCOMPLETED,
            booking::COUNT,
            booking::PAGE,
            booking::SEARCH,
            booking::COST,
            booking::COMPLETION,
            service::CREATE,
            service::UPSERT,
            service::DELETE,
            service::GET_BY_ID,
            service::COUNT,
            service::PAGE,
            service::SEARCH,
            booking_service::CREATE,
            booking_service::UPSERT,
            booking_service::DELETE,
            booking_service::REMOVE,
            booking_service::REMOVE_ALL_FOR_BOOKING,
            booking_service::GET_BY_ID,
            booking_service::FIND,
            booking_service::LIST_BY_BOOKING,
            booking_service::LIST_BY_SERVICE,
            booking_service::COUNT_BY_BOOKING,
            booking_service::PAGE_BY_BOOKING,
            booking_service::SEARCH_BY_BOOKING,
            booking_service::SET_COMPLETED,
            booking_service::TOGGLE_COMPLETED,
            booking_service::COUNT,
            booking_service::PAGE,
            payment::CREATE,
            payment::UPSERT,
            payment::DELETE,
            payment::GET_BY_ID,
            payment::LIST_BY_BOOKING,
            payment::LIST_BY_PERSON,
            payment::LIST_BY_PROPERTY,
            payment::TOTAL_FOR_BOOKING,
            payment::COUNT_FOR_BOOKING,
            payment::PROGRESS,
            payment::COUNT,
            payment::PAGE,
            payment::SEARCH,
            roster::CREATE,
            roster::UPSERT,
            roster::DELETE,
            roster::REMOVE,
            roster::GET_BY_ID,
            roster::LIST_BY_BOOKING_SERVICE,
            roster::LIST_BY_PERSON,
            roster::COUNT_BY_BOOKING_SERVICE,
            roster::COUNT_BY_PERSON,
            roster::PAGE_BY_BOOKING_SERVICE,
            roster::PAGE_BY_PERSON,
            roster::COUNT,
            roster::PAGE,
        ]
    }

    #[test]
    fn every_placeholder_has_a_parameter_name() {
        for stmt in catalog() {
            assert_eq!(
                max_placeholder(stmt.sql),
                stmt.params.len(),
                "{} declares {} params",
                stmt.name,
                stmt.params.len()
            );
        }
    }

    #[test]
    fn statement_names_are_unique() {
        let mut names: Vec<&str> = catalog().iter().map(|s| s.name).collect();
        let before = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    #[test]
    fn queries_select_and_mutations_do_not() {
        for stmt in catalog() {
            let is_select = stmt.sql.trim_start().starts_with("SELECT");
            assert_eq!(
                is_select,
                !stmt.kind.is_mutation(),
                "{} has kind {:?}",
                stmt.name,
                stmt.kind
            );
        }
    }
}
