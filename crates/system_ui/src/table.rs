//! Headless sort and selection model behind the [`DataTable`](crate::DataTable) primitive.
//!
//! Rows are opaque records implementing [`TableRow`]. A row exposes its cells through a typed
//! field enum instead of string keys, so a column can only name fields that exist on the row
//! type. Rows have no stable identity: selection is tracked by position in the currently
//! sorted sequence, and re-sorting does not remap selected positions.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// Record type rendered by a [`DataTable`](crate::DataTable).
pub trait TableRow: Clone + 'static {
    /// Typed identifier for the record's columns.
    type Field: Copy + Eq + 'static;

    /// Returns the cell value stored under `field`.
    fn cell(&self, field: Self::Field) -> CellValue;
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Displayable and comparable value of a single table cell.
pub enum CellValue {
    /// Missing value.
    #[default]
    Empty,
    /// Boolean value.
    Bool(bool),
    /// Signed integer value.
    Integer(i64),
    /// Floating point value.
    Float(f64),
    /// Text value.
    Text(String),
}

impl CellValue {
    /// Total order used by column sorting.
    ///
    /// Integers and floats compare by exact numeric value, with NaN after every other number
    /// and equal to itself. Cells of different kinds order as empty, boolean, number, then
    /// text.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(left), Self::Bool(right)) => left.cmp(right),
            (Self::Integer(left), Self::Integer(right)) => left.cmp(right),
            (Self::Float(left), Self::Float(right)) => compare_floats(*left, *right),
            (Self::Integer(left), Self::Float(right)) => compare_integer_float(*left, *right),
            (Self::Float(left), Self::Integer(right)) => {
                compare_integer_float(*right, *left).reverse()
            }
            (Self::Text(left), Self::Text(right)) => left.cmp(right),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Bool(_) => 1,
            Self::Integer(_) | Self::Float(_) => 2,
            Self::Text(_) => 3,
        }
    }
}

fn compare_floats(left: f64, right: f64) -> Ordering {
    match (left.is_nan(), right.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => left.partial_cmp(&right).unwrap_or(Ordering::Equal),
    }
}

/// Compares without rounding `integer` through `f64`, which loses precision past 2^53.
fn compare_integer_float(integer: i64, float: f64) -> Ordering {
    // 2^63 is exactly representable; every finite float in [-2^63, 2^63) truncates into i64.
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

    if float.is_nan() || float >= I64_BOUND {
        return Ordering::Less;
    }
    if float < -I64_BOUND {
        return Ordering::Greater;
    }
    let whole = float.trunc();
    match integer.cmp(&(whole as i64)) {
        Ordering::Equal if float > whole => Ordering::Less,
        Ordering::Equal if float < whole => Ordering::Greater,
        ordering => ordering,
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Column descriptor for a [`DataTable`](crate::DataTable).
pub struct Column<F> {
    /// Stable key used for DOM hooks.
    pub key: &'static str,
    /// Header text.
    pub title: String,
    /// Row field rendered in this column.
    pub field: F,
    /// Whether clicking the header sorts by this column.
    pub sortable: bool,
}

impl<F> Column<F> {
    /// Creates a non-sortable column.
    pub fn new(key: &'static str, title: impl Into<String>, field: F) -> Self {
        Self {
            key,
            title: title.into(),
            field,
            sortable: false,
        }
    }

    /// Marks the column as sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Sort direction for the active column.
pub enum SortDirection {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortDirection {
    /// Value for the `aria-sort` attribute.
    pub const fn aria_token(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Field and direction currently governing row order.
pub struct SortDirective<F> {
    /// Field being sorted on.
    pub field: F,
    /// Sort direction.
    pub direction: SortDirection,
}

/// Returns `rows` ordered by `directive`, or in input order when no directive is active.
///
/// The sort is stable in both directions: descending order reverses the comparison rather
/// than the output, so rows with equal cells keep their relative input order.
pub fn sort_rows<R: TableRow>(rows: &[R], directive: Option<&SortDirective<R::Field>>) -> Vec<R> {
    let mut sorted = rows.to_vec();
    if let Some(directive) = directive {
        sorted.sort_by(|left, right| {
            let ordering = left
                .cell(directive.field)
                .compare(&right.cell(directive.field));
            match directive.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
    sorted
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Mutually exclusive render states of a table.
pub enum TableView {
    /// Loading placeholder only.
    Loading,
    /// Empty placeholder only.
    Empty,
    /// Full table.
    Rows,
}

impl TableView {
    /// Picks the render state: loading wins over empty data, which wins over rows.
    pub const fn resolve(loading: bool, row_count: usize) -> Self {
        if loading {
            Self::Loading
        } else if row_count == 0 {
            Self::Empty
        } else {
            Self::Rows
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Sort directive and selected display positions for one mounted table.
pub struct TableState<F> {
    sort: Option<SortDirective<F>>,
    selected: BTreeSet<usize>,
}

impl<F> Default for TableState<F> {
    fn default() -> Self {
        Self {
            sort: None,
            selected: BTreeSet::new(),
        }
    }
}

impl<F: Copy + Eq> TableState<F> {
    /// Active sort directive, if any column has been sorted.
    pub fn sort(&self) -> Option<&SortDirective<F>> {
        self.sort.as_ref()
    }

    /// Direction for `field` when it is the active sort field.
    pub fn direction_for(&self, field: F) -> Option<SortDirection> {
        self.sort
            .as_ref()
            .filter(|directive| directive.field == field)
            .map(|directive| directive.direction)
    }

    /// Applies a header click.
    ///
    /// Non-sortable columns are ignored. A new field starts ascending; the active field flips
    /// direction. There is no way back to input order once a field has been sorted.
    pub fn sort_by(&mut self, column: &Column<F>) {
        if !column.sortable {
            return;
        }
        let direction = match self.direction_for(column.field) {
            Some(direction) => direction.flipped(),
            None => SortDirection::Ascending,
        };
        self.sort = Some(SortDirective {
            field: column.field,
            direction,
        });
    }

    /// Toggles selection of the row at display position `position`.
    pub fn toggle_row(&mut self, position: usize) {
        if !self.selected.remove(&position) {
            self.selected.insert(position);
        }
    }

    /// Toggles position `position` and resolves the resulting selection against `sorted`.
    ///
    /// The returned rows are exactly those at the selected positions after the toggle, in
    /// ascending position order.
    pub fn toggle_row_and_select<R>(&mut self, position: usize, sorted: &[R]) -> Vec<R>
    where
        R: TableRow<Field = F>,
    {
        self.toggle_row(position);
        self.selected_rows(sorted)
    }

        /// Whether display position `position` is selected.
    pub fn is_selected(&self, position: usize) -> bool {
        self.selected.contains(&position)
    }

    /// Selected display positions in ascending order.
    pub fn selected_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }

    /// Resolves selected positions against the current sorted sequence.
    ///
    /// Rows come back in ascending position order. Positions past the end of `sorted` are
    /// skipped.
    pub fn selected_rows<R>(&self, sorted: &[R]) -> Vec<R>
    where
        R: TableRow<Field = F>,
    {
        self.selected
            .iter()
            .filter_map(|position| sorted.get(*position).cloned())
            .collect()
    }

    /// Returns `rows` in display order for the active sort directive.
    pub fn sorted_rows<R>(&self, rows: &[R]) -> Vec<R>
    where
        R: TableRow<Field = F>,
    {
        sort_rows(rows, self.sort.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: i64,
        group: &'static str,
        score: Option<f64>,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum ItemField {
        Id,
        Group,
        Score,
    }

    impl TableRow for Item {
        type Field = ItemField;

        fn cell(&self, field: ItemField) -> CellValue {
            match field {
                ItemField::Id => self.id.into(),
                ItemField::Group => self.group.into(),
                ItemField::Score => self.score.into(),
            }
        }
    }

    fn item(id: i64, group: &'static str) -> Item {
        Item {
            id,
            group,
            score: None,
        }
    }

    fn ids(rows: &[Item]) -> Vec<i64> {
        rows.iter().map(|row| row.id).collect()
    }

    fn id_column() -> Column<ItemField> {
        Column::new("id", "ID", ItemField::Id).sortable()
    }

    #[test]
    fn header_clicks_sort_ascending_then_descending() {
        let rows = vec![item(2, "a"), item(1, "a"), item(3, "a")];
        let mut state = TableState::default();

        state.sort_by(&id_column());
        assert_eq!(ids(&state.sorted_rows(&rows)), vec![1, 2, 3]);

        state.sort_by(&id_column());
        assert_eq!(ids(&state.sorted_rows(&rows)), vec![3, 2, 1]);
    }

    #[test]
    fn unsorted_state_keeps_input_order() {
        let rows = vec![item(2, "a"), item(1, "a"), item(3, "a")];
        let state = TableState::<ItemField>::default();

        assert_eq!(state.sort(), None);
        assert_eq!(ids(&state.sorted_rows(&rows)), vec![2, 1, 3]);
    }

    #[test]
    fn descending_click_flips_back_to_ascending() {
        let mut state = TableState::default();
        state.sort_by(&id_column());
        state.sort_by(&id_column());
        state.sort_by(&id_column());

        assert_eq!(
            state.sort(),
            Some(&SortDirective {
                field: ItemField::Id,
                direction: SortDirection::Ascending,
            })
        );
    }

    #[test]
    fn switching_fields_resets_to_ascending() {
        let mut state = TableState::default();
        state.sort_by(&id_column());
        state.sort_by(&id_column());
        state.sort_by(&Column::new("group", "Group", ItemField::Group).sortable());

        assert_eq!(state.direction_for(ItemField::Group), Some(SortDirection::Ascending));
        assert_eq!(state.direction_for(ItemField::Id), None);
    }

    #[test]
    fn non_sortable_columns_are_ignored() {
        let mut state = TableState::default();
        state.sort_by(&Column::new("group", "Group", ItemField::Group));
        assert_eq!(state.sort(), None);

        state.sort_by(&id_column());
        state.sort_by(&Column::new("group", "Group", ItemField::Group));
        assert_eq!(state.direction_for(ItemField::Id), Some(SortDirection::Ascending));
    }

    #[test]
    fn equal_keys_keep_input_order_in_both_directions() {
        let rows = vec![item(1, "b"), item(2, "a"), item(3, "b"), item(4, "a")];
        let group = Column::new("group", "Group", ItemField::Group).sortable();
        let mut state = TableState::default();

        state.sort_by(&group);
        assert_eq!(ids(&state.sorted_rows(&rows)), vec![2, 4, 1, 3]);

        state.sort_by(&group);
        assert_eq!(ids(&state.sorted_rows(&rows)), vec![1, 3, 2, 4]);
    }

    #[test]
    fn sort_derivation_is_repeatable() {
        let rows = vec![item(5, "c"), item(3, "a"), item(4, "b"), item(3, "z")];
        let directive = SortDirective {
            field: ItemField::Id,
            direction: SortDirection::Descending,
        };

        let first = sort_rows(&rows, Some(&directive));
        let second = sort_rows(&rows, Some(&directive));

        assert_eq!(first, second);
        assert_eq!(ids(&first), vec![5, 4, 3, 3]);
        assert_eq!(first[2].group, "a");
    }

    #[test]
    fn missing_scores_sort_first_and_nan_last() {
        let mut rows = vec![item(1, "a"), item(2, "a"), item(3, "a"), item(4, "a")];
        rows[0].score = Some(2.5);
        rows[1].score = None;
        rows[2].score = Some(f64::NAN);
        rows[3].score = Some(1.0);
        let directive = SortDirective {
            field: ItemField::Score,
            direction: SortDirection::Ascending,
        };

        let sorted = sort_rows(&rows, Some(&directive));

        assert_eq!(ids(&sorted), vec![2, 4, 1, 3]);
    }

    #[test]
    fn integers_and_floats_compare_exactly_past_f64_precision() {
        let above = CellValue::Integer(9_007_199_254_740_993);
        let float = CellValue::Float(9_007_199_254_740_992.0);
        let exact = CellValue::Integer(9_007_199_254_740_992);

        assert_eq!(above.compare(&float), Ordering::Greater);
        assert_eq!(float.compare(&exact), Ordering::Equal);
        assert_eq!(above.compare(&exact), Ordering::Greater);
        assert_eq!(float.compare(&above), Ordering::Less);
    }

    #[test]
    fn fractional_floats_order_around_neighbouring_integers() {
        assert_eq!(
            CellValue::Integer(2).compare(&CellValue::Float(2.5)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Integer(-2).compare(&CellValue::Float(-2.5)),
            Ordering::Greater
        );
        assert_eq!(
            CellValue::Integer(i64::MAX).compare(&CellValue::Float(f64::INFINITY)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Float(f64::NAN).compare(&CellValue::Integer(i64::MAX)),
            Ordering::Greater
        );
        assert_eq!(
            CellValue::Float(-0.0).compare(&CellValue::Integer(0)),
            Ordering::Equal
        );
    }

    #[test]
    fn toggling_positions_reports_rows_at_selected_positions() {
        let rows = vec![item(10, "a"), item(20, "a"), item(30, "a")];
        let mut state = TableState::default();

        state.toggle_row(1);
        state.toggle_row(2);
        state.toggle_row(1);

        assert_eq!(state.selected_positions().collect::<Vec<_>>(), vec![2]);
        assert_eq!(ids(&state.selected_rows(&state.sorted_rows(&rows))), vec![30]);
    }

    #[test]
    fn each_toggle_reports_the_full_selection() {
        let rows = vec![item(10, "a"), item(20, "a"), item(30, "a")];
        let mut state = TableState::default();

        let payloads = [1, 2, 1]
            .into_iter()
            .map(|position| ids(&state.toggle_row_and_select(position, &rows)))
            .collect::<Vec<_>>();

        assert_eq!(payloads, vec![vec![20], vec![20, 30], vec![30]]);
        assert_eq!(state.selected_positions().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn selected_rows_come_back_in_position_order() {
        let rows = vec![item(10, "a"), item(20, "a"), item(30, "a")];
        let mut state = TableState::default();

        state.toggle_row(2);
        state.toggle_row(0);

        assert_eq!(ids(&state.selected_rows(&rows)), vec![10, 30]);
    }

    #[test]
    fn selection_follows_positions_across_resorts() {
        let rows = vec![item(2, "a"), item(1, "a"), item(3, "a")];
        let mut state = TableState::default();

        state.toggle_row(0);
        assert_eq!(ids(&state.selected_rows(&state.sorted_rows(&rows))), vec![2]);

        state.sort_by(&id_column());
        assert!(state.is_selected(0));
        assert_eq!(ids(&state.selected_rows(&state.sorted_rows(&rows))), vec![1]);
    }

    #[test]
    fn out_of_range_positions_are_skipped() {
        let rows = vec![item(1, "a"), item(2, "a"), item(3, "a")];
        let mut state = TableState::default();
        state.toggle_row(0);
        state.toggle_row(2);

        let shrunk = &rows[..2];

        assert!(state.is_selected(2));
        assert_eq!(ids(&state.selected_rows(shrunk)), vec![1]);
    }

    #[test]
    fn loading_wins_over_data_and_empty_data_renders_placeholder() {
        assert_eq!(TableView::resolve(true, 4), TableView::Loading);
        assert_eq!(TableView::resolve(true, 0), TableView::Loading);
        assert_eq!(TableView::resolve(false, 0), TableView::Empty);
        assert_eq!(TableView::resolve(false, 4), TableView::Rows);
    }

    #[test]
    fn cells_display_like_their_source_values() {
        assert_eq!(CellValue::from(42_i64).to_string(), "42");
        assert_eq!(CellValue::from("Alice").to_string(), "Alice");
        assert_eq!(CellValue::from(true).to_string(), "true");
        assert_eq!(CellValue::from(None::<i64>).to_string(), "");
        assert_eq!(
            CellValue::Integer(2).compare(&CellValue::Float(2.5)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Text("a".into()).compare(&CellValue::Integer(1)),
            Ordering::Greater
        );
    }
}
