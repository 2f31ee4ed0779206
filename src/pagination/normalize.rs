use super::{
    collection::{CollectionDescriptor, ColumnOf},
    request::{PaginationInput, SortOrder, DEFAULT_PAGE, DEFAULT_PAGE_SIZE},
    PaginationError,
};

/// Fully specified window into a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchParams<C> {
    pub page: u64,
    pub offset: u64,
    pub limit: u64,
    pub order_by: Option<C>,
    pub direction: SortOrder,
}

/// Applies defaults and resolves the sort field. Values below 1 are not
/// rejected here; page 0 is treated like page 1 for the offset.
pub fn normalize<D>(
    input: &PaginationInput,
    collection: &D,
) -> Result<FetchParams<ColumnOf<D>>, PaginationError>
where
    D: CollectionDescriptor,
{
    let page = u64::from(input.page.unwrap_or(DEFAULT_PAGE));
    let limit = u64::from(input.size.unwrap_or(DEFAULT_PAGE_SIZE));

    let order_by = match input.sort_by.as_deref() {
        None => None,
        Some(field) => Some(collection.resolve_field(field).ok_or_else(|| {
            PaginationError::UnknownSortField {
                collection: collection.name().to_string(),
                field: field.to_string(),
            }
        })?),
    };

    Ok(FetchParams {
        page,
        offset: page.saturating_sub(1) * limit,
        limit,
        order_by,
        direction: input.sort_order.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use entity::{bot, tag};
    use pretty_assertions::assert_eq;
    use sea_orm::IdenStatic;

    use super::*;
    use crate::pagination::Table;

    #[test]
    fn defaults() {
        // Arrange
        let table = Table::<tag::Entity>::new();

        // Act
        let params = normalize(&PaginationInput::default(), &table).unwrap();

        // Assert
        assert_eq!(params.page, 1);
        assert_eq!(params.offset, 0);
        assert_eq!(params.limit, 10);
        assert!(params.order_by.is_none());
        assert_eq!(params.direction, SortOrder::Asc);
    }

    #[test]
    fn offset_arithmetic() {
        let table = Table::<tag::Entity>::new();
        for (page, size, offset) in [(1, 10, 0), (2, 10, 10), (3, 10, 20), (4, 25, 75)] {
            let params = normalize(&PaginationInput::new(page, size), &table).unwrap();
            assert_eq!(params.offset, offset, "page={page} size={size}");
            assert_eq!(params.limit, u64::from(size));
        }
    }

    #[test]
    fn page_zero_passes_through() {
        let table = Table::<tag::Entity>::new();

        let params = normalize(&PaginationInput::new(0, 10), &table).unwrap();

        assert_eq!(params.page, 0);
        assert_eq!(params.offset, 0);
    }

    #[test]
    fn no_upper_bound_on_size() {
        let table = Table::<tag::Entity>::new();

        let params = normalize(&PaginationInput::new(2, 5000), &table).unwrap();

        assert_eq!(params.limit, 5000);
        assert_eq!(params.offset, 5000);
    }

    #[test]
    fn resolves_sort_field() {
        // Arrange
        let table = Table::<bot::Entity>::new();
        let input = PaginationInput::new(1, 10).sorted_by("votes", SortOrder::Desc);

        // Act
        let params = normalize(&input, &table).unwrap();

        // Assert
        let order_by = params.order_by.map(|c| c.as_str().to_owned());
        assert_eq!(order_by.as_deref(), Some("votes"));
        assert_eq!(params.direction, SortOrder::Desc);
    }

    #[test]
    fn unknown_sort_field_fails() {
        // Arrange
        let table = Table::<bot::Entity>::new();
        let input = PaginationInput::new(1, 10).sorted_by("popularity", SortOrder::Asc);

        // Act
        let result = normalize(&input, &table);

        // Assert
        match result.unwrap_err() {
            PaginationError::UnknownSortField { collection, field } => {
                assert_eq!(collection, "bot");
                assert_eq!(field, "popularity");
            }
            e => panic!("Unexpected error {e:?}"),
        }
    }
}
