use crate::country::CountryStanding;
use crate::error::{Error, Result};
use crate::models::User;
use chrono::NaiveDate;
use csv::WriterBuilder;
use log::debug;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// `users_YYYY-MM-DD.json` for the given day.
pub fn users_file_name(date: NaiveDate) -> String {
    format!("users_{}.json", date.format("%Y-%m-%d"))
}

/// Save users as a pretty JSON array (2-space indent, non-ASCII kept as is).
pub fn save_users_json<P: AsRef<Path>>(users: &[User], path: P) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source: std::io::Error| Error::WriteFile {
        path: path.to_path_buf(),
        source,
    };
    let s = serde_json::to_string_pretty(users).map_err(|e| write_err(e.into()))?;
    let mut f = File::create(path).map_err(write_err)?;
    f.write_all(s.as_bytes()).map_err(write_err)?;
    debug!("wrote {} users to {}", users.len(), path.display());
    Ok(())
}

/// Load a users array previously written by [`save_users_json`].
pub fn load_users<P: AsRef<Path>>(path: P) -> Result<Vec<User>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let users: Vec<User> = serde_json::from_str(&text).map_err(|source| Error::MalformedFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded {} users from {}", users.len(), path.display());
    Ok(users)
}

/// Write country standings as tab-separated lines without a header:
/// `country_rank  global_rank  solved  profile_url`.
pub fn write_country_standings<W: Write>(rows: &[CountryStanding], out: W) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(out);
    for r in rows {
        wtr.serialize((r.country_rank, r.global_rank, r.solved, &r.profile_url))?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn dated_file_name() {
        let d = NaiveDate::from_ymd_opt(2025, 4, 29).unwrap();
        assert_eq!(users_file_name(d), "users_2025-04-29.json");
    }

    #[test]
    fn write_and_load_users() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("users.json");
        let users = vec![User::new("tourist", Some("Belarus")), User::new("anon", None)];
        save_users_json(&users, &p).unwrap();
        assert!(p.exists());
        assert_eq!(load_users(&p).unwrap(), users);
    }
}
