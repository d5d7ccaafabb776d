//! SQLite schema definitions and SQL query constants.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Cycles table
CREATE TABLE IF NOT EXISTS cycles (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    month TEXT NOT NULL,
    period_length INTEGER NOT NULL,
    cycle_length INTEGER NOT NULL,
    start_date TEXT NOT NULL,
    next_cycle_date TEXT NOT NULL,
    period_range TEXT NOT NULL,
    ovulation_range TEXT NOT NULL,
    unsafe_range TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Indexes for efficient queries
CREATE INDEX IF NOT EXISTS idx_cycles_user_id ON cycles(user_id);
CREATE INDEX IF NOT EXISTS idx_cycles_user_start ON cycles(user_id, start_date);
"#;

pub const INSERT_CYCLE: &str = r#"
INSERT INTO cycles (
    id, user_id, month, period_length, cycle_length, start_date,
    next_cycle_date, period_range, ovulation_range, unsafe_range,
    created_at, updated_at
)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
"#;

pub const SELECT_CYCLE_BY_ID: &str = r#"
SELECT id, user_id, month, period_length, cycle_length, start_date,
       next_cycle_date, period_range, ovulation_range, unsafe_range,
       created_at, updated_at
FROM cycles
WHERE id = ?1
"#;

pub const SELECT_CYCLES_BY_USER: &str = r#"
SELECT id, user_id, month, period_length, cycle_length, start_date,
       next_cycle_date, period_range, ovulation_range, unsafe_range,
       created_at, updated_at
FROM cycles
WHERE user_id = ?1
ORDER BY start_date, id
"#;

pub const UPDATE_CYCLE: &str = r#"
UPDATE cycles
SET month = ?2, period_length = ?3, cycle_length = ?4, start_date = ?5,
    next_cycle_date = ?6, period_range = ?7, ovulation_range = ?8,
    unsafe_range = ?9, updated_at = ?10
WHERE id = ?1
"#;

pub const DELETE_CYCLE: &str = r#"
DELETE FROM cycles
WHERE id = ?1
"#;
