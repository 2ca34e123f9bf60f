//! Mock records rendered by the data table stories.

use system_ui::{CellValue, Column, TableRow};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Directory user shown in the table stories.
pub struct User {
    /// Numeric id.
    pub id: u32,
    /// Display name.
    pub name: &'static str,
    /// Contact email.
    pub email: &'static str,
    /// Access role.
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Columns of [`User`].
pub enum UserField {
    /// [`User::id`].
    Id,
    /// [`User::name`].
    Name,
    /// [`User::email`].
    Email,
    /// [`User::role`].
    Role,
}

impl TableRow for User {
    type Field = UserField;

    fn cell(&self, field: UserField) -> CellValue {
        match field {
            UserField::Id => self.id.into(),
            UserField::Name => self.name.into(),
            UserField::Email => self.email.into(),
            UserField::Role => self.role.into(),
        }
    }
}

/// Four users covering every role, in id order.
pub fn mock_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Alice",
            email: "alice@example.com",
            role: "Admin",
        },
        User {
            id: 2,
            name: "Bob",
            email: "bob@example.com",
            role: "Editor",
        },
        User {
            id: 3,
            name: "Charlie",
            email: "charlie@example.com",
            role: "Viewer",
        },
        User {
            id: 4,
            name: "David",
            email: "david@example.com",
            role: "Admin",
        },
    ]
}

/// Column set used by every table story. Email is the only non-sortable column.
pub fn user_columns() -> Vec<Column<UserField>> {
    vec![
        Column::new("id", "ID", UserField::Id).sortable(),
        Column::new("name", "Name", UserField::Name).sortable(),
        Column::new("email", "Email", UserField::Email),
        Column::new("role", "Role", UserField::Role).sortable(),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use system_ui::table::{SortDirection, TableState};

    use super::*;

    fn names(users: &[User]) -> Vec<&'static str> {
        users.iter().map(|user| user.name).collect()
    }

    #[test]
    fn role_sort_keeps_admins_in_id_order() {
        let users = mock_users();
        let role = user_columns().remove(3);
        let mut state = TableState::default();

        state.sort_by(&role);
        assert_eq!(
            names(&state.sorted_rows(&users)),
            vec!["Alice", "David", "Bob", "Charlie"]
        );

        state.sort_by(&role);
        assert_eq!(state.direction_for(UserField::Role), Some(SortDirection::Descending));
        assert_eq!(
            names(&state.sorted_rows(&users)),
            vec!["Charlie", "Bob", "Alice", "David"]
        );
    }

    #[test]
    fn email_column_does_not_sort() {
        let users = mock_users();
        let email = user_columns().remove(2);
        let mut state = TableState::default();

        state.sort_by(&email);

        assert_eq!(state.sort(), None);
        assert_eq!(names(&state.sorted_rows(&users)), names(&users));
    }

    #[test]
    fn selection_after_descending_id_sort_reports_display_rows() {
        let users = mock_users();
        let id = user_columns().remove(0);
        let mut state = TableState::default();

        state.sort_by(&id);
        state.sort_by(&id);
        state.toggle_row(0);
        state.toggle_row(3);

        let sorted = state.sorted_rows(&users);
        assert_eq!(names(&state.selected_rows(&sorted)), vec!["David", "Alice"]);
    }
}
