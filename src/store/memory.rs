use chrono::Utc;
use parking_lot::Mutex;

use super::{ProductStore, StoreError, StoreResult, UserStore};
use crate::models::{NewProduct, NewUser, Product, ProductChanges, User, UserChanges};

/// Process-local store. Records stay in id order because ids only grow and
/// new records are appended.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    products: Vec<Product>,
    users: Vec<User>,
    last_product_id: i32,
    last_user_id: i32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductStore for MemoryStore {
    fn create(&self, input: NewProduct) -> StoreResult<Product> {
        let mut state = self.state.lock();
        state.last_product_id += 1;
        let product = Product::from_new(state.last_product_id, input, Utc::now());
        state.products.push(product.clone());
        Ok(product)
    }

    fn find_all(&self) -> StoreResult<Vec<Product>> {
        Ok(self.state.lock().products.clone())
    }

    fn find_one(&self, id: i32) -> StoreResult<Product> {
        self.state
            .lock()
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::ProductNotFound(id))
    }

    fn update(&self, id: i32, changes: ProductChanges) -> StoreResult<Product> {
        let mut state = self.state.lock();
        let product = state
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::ProductNotFound(id))?;
        product.apply(changes, Utc::now());
        Ok(product.clone())
    }

    fn remove(&self, id: i32) -> StoreResult<()> {
        let mut state = self.state.lock();
        let index = state
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::ProductNotFound(id))?;
        state.products.remove(index);
        Ok(())
    }
}

impl UserStore for MemoryStore {
    fn create(&self, input: NewUser) -> StoreResult<User> {
        let mut state = self.state.lock();
        state.last_user_id += 1;
        let user = User::from_new(state.last_user_id, input, Utc::now());
        state.users.push(user.clone());
        Ok(user)
    }

    fn find_all(&self) -> StoreResult<Vec<User>> {
        Ok(self.state.lock().users.clone())
    }

    fn find_one(&self, id: i32) -> StoreResult<User> {
        self.state
            .lock()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(StoreError::UserNotFound(id))
    }

    fn update(&self, id: i32, changes: UserChanges) -> StoreResult<User> {
        let mut state = self.state.lock();
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(StoreError::UserNotFound(id))?;
        user.apply(changes, Utc::now());
        Ok(user.clone())
    }

    fn remove(&self, id: i32) -> StoreResult<()> {
        let mut state = self.state.lock();
        let index = state
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(StoreError::UserNotFound(id))?;
        state.users.remove(index);
        Ok(())
    }
}
