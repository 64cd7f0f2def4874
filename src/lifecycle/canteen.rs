use crate::menu::Menu;
use crate::model::{DishId, OrderId};
use crate::orders::{OrderError, OrderListing, OrderManager};
use crate::persistence::{DataFile, Hydration, PersistenceError};
use tracing::info;

/// The canteen's state for one session.
///
/// `Canteen` is responsible for:
/// - **Hydration**: building the [`Menu`] and [`OrderManager`] from the data file, or empty
/// - **Wiring**: handing the menu to the order book whenever an order needs validating
/// - **Persisting**: writing everything back to the data file
///
/// # Example
///
/// ```no_run
/// use canteen::lifecycle::Canteen;
/// use canteen::model::{Availability, DishId};
/// use canteen::persistence::DataFile;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let (mut canteen, _hydration) = Canteen::open(DataFile::new("data.json"))?;
///
/// let soup = canteen.menu.add_dish("Soup", 5.0, Availability::Yes)?;
/// canteen.take_order("Alice", vec![soup])?;
///
/// canteen.save()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Canteen {
    pub menu: Menu,
    pub orders: OrderManager,
    data_file: DataFile,
}

impl Canteen {
    /// Creates a canteen with an empty menu and no orders.
    pub fn new(data_file: DataFile) -> Self {
        Self {
            menu: Menu::new(),
            orders: OrderManager::new(),
            data_file,
        }
    }

    /// Loads the canteen from `data_file`, or starts empty if the file does not exist.
    pub fn open(data_file: DataFile) -> Result<(Self, Hydration), PersistenceError> {
        let (menu, orders, hydration) = data_file.load()?;
        info!(?hydration, path = %data_file.path().display(), "Canteen opened");
        let canteen = Self {
            menu,
            orders,
            data_file,
        };
        Ok((canteen, hydration))
    }

    pub fn data_file(&self) -> &DataFile {
        &self.data_file
    }

    /// Takes an order, validating the dishes against the current menu.
    pub fn take_order(
        &mut self,
        customer_name: &str,
        dish_ids: Vec<DishId>,
    ) -> Result<OrderId, OrderError> {
        self.orders.take_order(&self.menu, customer_name, dish_ids)
    }

    pub fn list_orders(&self, status_filter: Option<&str>) -> OrderListing {
        self.orders.list_orders(&self.menu, status_filter)
    }

    /// Writes the menu and orders to the data file.
    pub fn save(&self) -> Result<(), PersistenceError> {
        self.data_file.save(&self.menu, &self.orders)
    }
}
