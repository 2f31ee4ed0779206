use std::{marker::PhantomData, str::FromStr};

use sea_orm::{EntityTrait, IdenStatic, Select};

/// Column type of the entity behind a descriptor.
pub type ColumnOf<D> = <<D as CollectionDescriptor>::Entity as EntityTrait>::Column;

/// Model type of the entity behind a descriptor.
pub type ModelOf<D> = <<D as CollectionDescriptor>::Entity as EntityTrait>::Model;

/// A paginatable collection: knows which table to query and how to turn a
/// client supplied field name into an orderable column.
pub trait CollectionDescriptor: Send + Sync {
    type Entity: EntityTrait;

    fn name(&self) -> &str;

    /// Returns `None` when the field does not exist on the collection
    /// (or is not allowed as a sort key).
    fn resolve_field(&self, field: &str) -> Option<ColumnOf<Self>>;

    fn select(&self) -> Select<Self::Entity> {
        Self::Entity::find()
    }
}

/// Descriptor for a plain sea-orm entity table.
pub struct Table<E> {
    name: String,
    sortable: Option<&'static [&'static str]>,
    entity: PhantomData<fn() -> E>,
}

impl<E: EntityTrait> Table<E> {
    pub fn new() -> Self {
        Self {
            name: E::default().table_name().to_string(),
            sortable: None,
            entity: PhantomData,
        }
    }

    /// Restrict sorting to the given fields. Names may be given in
    /// snake_case or camelCase, the same way clients send them.
    pub fn with_sortable(mut self, fields: &'static [&'static str]) -> Self {
        self.sortable = Some(fields);
        self
    }

    fn is_sortable(&self, column: &E::Column) -> bool {
        match self.sortable {
            None => true,
            Some(fields) => fields
                .iter()
                .filter_map(|f| E::Column::from_str(f).ok())
                .any(|c| c.as_str() == column.as_str()),
        }
    }
}

impl<E: EntityTrait> Default for Table<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntityTrait> CollectionDescriptor for Table<E> {
    type Entity = E;

    fn name(&self) -> &str {
        &self.name
    }

    fn resolve_field(&self, field: &str) -> Option<E::Column> {
        E::Column::from_str(field)
            .ok()
            .filter(|column| self.is_sortable(column))
    }
}

#[cfg(test)]
mod tests {
    use entity::bot;

    use super::*;

    #[test]
    fn table_name_from_entity() {
        let table = Table::<bot::Entity>::new();
        assert_eq!(table.name(), "bot");
    }

    #[test]
    fn resolves_snake_and_camel_case() {
        let table = Table::<bot::Entity>::new();

        let snake = table
            .resolve_field("guild_count")
            .map(|c| c.as_str().to_owned());
        let camel = table
            .resolve_field("guildCount")
            .map(|c| c.as_str().to_owned());

        assert_eq!(snake.as_deref(), Some("guild_count"));
        assert_eq!(camel.as_deref(), Some("guild_count"));
    }

    #[test]
    fn unknown_field_is_unresolved() {
        let table = Table::<bot::Entity>::new();
        assert!(table.resolve_field("popularity").is_none());
    }

    #[test]
    fn allow_list_narrows_resolution() {
        let table = Table::<bot::Entity>::new().with_sortable(&["name", "createdAt"]);

        assert!(table.resolve_field("name").is_some());
        assert!(table.resolve_field("created_at").is_some());
        assert!(table.resolve_field("status").is_none(), "exists but not sortable");
    }
}
