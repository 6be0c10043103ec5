//! `SQLite` implementation of [`PlaceRepository`].
//!
//! Amenity links live in the `place_amenity` join table and are loaded
//! alongside each place.

use std::collections::HashMap;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::PlaceRepository;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{AmenityId, CityId, PlaceId};
use hbnb_domain::place::Place;

use crate::error::StorageError;
use crate::row;

struct Wrapper(Place);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(r: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Place {
            id: row::id(r, "id")?,
            city_id: row::id(r, "city_id")?,
            user_id: row::id(r, "user_id")?,
            name: r.try_get("name")?,
            description: r.try_get("description")?,
            number_rooms: r.try_get("number_rooms")?,
            number_bathrooms: r.try_get("number_bathrooms")?,
            max_guest: r.try_get("max_guest")?,
            price_by_night: r.try_get("price_by_night")?,
            latitude: r.try_get("latitude")?,
            longitude: r.try_get("longitude")?,
            amenity_ids: Vec::new(),
            created_at: row::timestamp(r, "created_at")?,
            updated_at: row::timestamp(r, "updated_at")?,
        }))
    }
}

/// One row of `place_amenity`.
struct Link {
    place_id: PlaceId,
    amenity_id: AmenityId,
}

impl<'r> FromRow<'r, SqliteRow> for Link {
    fn from_row(r: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            place_id: row::id(r, "place_id")?,
            amenity_id: row::id(r, "amenity_id")?,
        })
    }
}

const INSERT: &str = r"
    INSERT INTO places (id, city_id, user_id, name, description, number_rooms,
        number_bathrooms, max_guest, price_by_night, latitude, longitude,
        created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT * FROM places WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM places ORDER BY created_at, id";
const SELECT_BY_CITY: &str = "SELECT * FROM places WHERE city_id = ? ORDER BY created_at, id";

const UPDATE: &str = r"
    UPDATE places
    SET name = ?, description = ?, number_rooms = ?, number_bathrooms = ?,
        max_guest = ?, price_by_night = ?, latitude = ?, longitude = ?,
        updated_at = ?
    WHERE id = ?
";

// Reviews and links cascade.
const DELETE_BY_ID: &str = "DELETE FROM places WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM places";

const SELECT_LINKS_BY_PLACE: &str =
    "SELECT place_id, amenity_id FROM place_amenity WHERE place_id = ? ORDER BY rowid";
const SELECT_ALL_LINKS: &str = "SELECT place_id, amenity_id FROM place_amenity ORDER BY rowid";
const SELECT_LINKS_BY_CITY: &str = r"
    SELECT pa.place_id, pa.amenity_id
    FROM place_amenity pa
    JOIN places p ON p.id = pa.place_id
    WHERE p.city_id = ?
    ORDER BY pa.rowid
";

const INSERT_LINK: &str = "INSERT OR IGNORE INTO place_amenity (place_id, amenity_id) VALUES (?, ?)";
const DELETE_LINK: &str = "DELETE FROM place_amenity WHERE place_id = ? AND amenity_id = ?";

/// Fill `amenity_ids` on each place from a batch of link rows.
fn attach(rows: Vec<Wrapper>, links: Vec<Link>) -> Vec<Place> {
    let mut by_place: HashMap<PlaceId, Vec<AmenityId>> = HashMap::new();
    for link in links {
        by_place.entry(link.place_id).or_default().push(link.amenity_id);
    }
    rows.into_iter()
        .map(|Wrapper(mut place)| {
            if let Some(ids) = by_place.remove(&place.id) {
                place.amenity_ids = ids;
            }
            place
        })
        .collect()
}

/// `SQLite`-backed place repository.
#[derive(Clone)]
pub struct SqlitePlaceRepository {
    pool: SqlitePool,
}

impl SqlitePlaceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn amenity_ids(&self, place_id: PlaceId) -> Result<Vec<AmenityId>, StorageError> {
        let links: Vec<Link> = sqlx::query_as(SELECT_LINKS_BY_PLACE)
            .bind(place_id.to_string())
            .fetch_all(&self.pool)
            .await?;
        Ok(links.into_iter().map(|link| link.amenity_id).collect())
    }
}

impl PlaceRepository for SqlitePlaceRepository {
    async fn create(&self, mut place: Place) -> Result<Place, HbnbError> {
        sqlx::query(INSERT)
            .bind(place.id.to_string())
            .bind(place.city_id.to_string())
            .bind(place.user_id.to_string())
            .bind(&place.name)
            .bind(&place.description)
            .bind(place.number_rooms)
            .bind(place.number_bathrooms)
            .bind(place.max_guest)
            .bind(place.price_by_night)
            .bind(place.latitude)
            .bind(place.longitude)
            .bind(row::encode_timestamp(&place.created_at))
            .bind(row::encode_timestamp(&place.updated_at))
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        place.amenity_ids.clear();
        Ok(place)
    }

    async fn get_by_id(&self, id: PlaceId) -> Result<Option<Place>, HbnbError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        let Some(Wrapper(mut place)) = row else {
            return Ok(None);
        };
        place.amenity_ids = self.amenity_ids(id).await?;
        Ok(Some(place))
    }

    async fn get_all(&self) -> Result<Vec<Place>, HbnbError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;
        let links: Vec<Link> = sqlx::query_as(SELECT_ALL_LINKS)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(attach(rows, links))
    }

    async fn find_by_city(&self, city_id: CityId) -> Result<Vec<Place>, HbnbError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_CITY)
            .bind(city_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;
        let links: Vec<Link> = sqlx::query_as(SELECT_LINKS_BY_CITY)
            .bind(city_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(attach(rows, links))
    }

    async fn update(&self, mut place: Place) -> Result<Place, HbnbError> {
        sqlx::query(UPDATE)
            .bind(&place.name)
            .bind(&place.description)
            .bind(place.number_rooms)
            .bind(place.number_bathrooms)
            .bind(place.max_guest)
            .bind(place.price_by_night)
            .bind(place.latitude)
            .bind(place.longitude)
            .bind(row::encode_timestamp(&place.updated_at))
            .bind(place.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        place.amenity_ids = self.amenity_ids(place.id).await?;
        Ok(place)
    }

    async fn delete(&self, id: PlaceId) -> Result<(), HbnbError> {
        sqlx::query(DELETE_BY_ID)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }

    async fn count(&self) -> Result<usize, HbnbError> {
        Ok(row::count(&self.pool, COUNT).await?)
    }

    async fn link_amenity(&self, place_id: PlaceId, amenity_id: AmenityId) -> Result<(), HbnbError> {
        sqlx::query(INSERT_LINK)
            .bind(place_id.to_string())
            .bind(amenity_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        tracing::debug!(%place_id, %amenity_id, "amenity linked");
        Ok(())
    }

    async fn unlink_amenity(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> Result<(), HbnbError> {
        sqlx::query(DELETE_LINK)
            .bind(place_id.to_string())
            .bind(amenity_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}
