use std::sync::Arc;

use parking_lot::Mutex;

use crate::catalog::{selectors as catalog_selectors, CatalogAction, Product};
use crate::session::{auth, selectors as session_selectors, SessionAction, User};
use crate::state::AppState;
use crate::store::{Store, Subscription};
use crate::ui::login::LoginForm;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Welcome,
    Products,
    Login,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::Welcome => "Welcome",
            Page::Products => "Products",
            Page::Login => "Log In",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Page::Welcome => 0,
            Page::Products => 1,
            Page::Login => 2,
        }
    }

    fn next(self) -> Self {
        match self {
            Page::Welcome => Page::Products,
            Page::Products => Page::Login,
            Page::Login => Page::Welcome,
        }
    }
}

/// The selectors this view binds. Each holds its own memo, dropped with
/// the app on teardown.
struct Bindings {
    products: catalog_selectors::CatalogSelector<Vec<Product>>,
    show_code: catalog_selectors::CatalogSelector<bool>,
    error: catalog_selectors::CatalogSelector<String>,
    current_product: catalog_selectors::CatalogSelector<Option<Product>>,
    mask_user_name: session_selectors::SessionSelector<bool>,
    current_user: session_selectors::SessionSelector<Option<User>>,
}

pub struct App {
    store: Store,
    page: Page,
    should_quit: bool,
    login: LoginForm,
    bind: Bindings,
    /// Latest store snapshot, refreshed by the subscription below.
    snapshot: Arc<Mutex<AppState>>,
    /// Unregisters the store observer when the app is torn down.
    _subscription: Subscription,
}

impl App {
    pub fn new(store: Store) -> Self {
        let snapshot = Arc::new(Mutex::new(store.state()));
        let subscription = store.subscribe({
            let snapshot = Arc::clone(&snapshot);
            move |state| *snapshot.lock() = state.clone()
        });

        Self {
            store,
            page: Page::Welcome,
            should_quit: false,
            login: LoginForm::default(),
            bind: Bindings {
                products: catalog_selectors::products(),
                show_code: catalog_selectors::show_product_code(),
                error: catalog_selectors::error(),
                current_product: catalog_selectors::current_product(),
                mask_user_name: session_selectors::mask_user_name(),
                current_user: session_selectors::current_user(),
            },
            snapshot,
            _subscription: subscription,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn go_to(&mut self, page: Page) {
        self.page = page;
    }

    pub fn next_page(&mut self) {
        self.page = self.page.next();
    }

    pub fn login(&self) -> &LoginForm {
        &self.login
    }

    pub fn login_mut(&mut self) -> &mut LoginForm {
        &mut self.login
    }

    // -- Selector reads ------------------------------------------------------

    pub fn products(&self) -> Vec<Product> {
        let state = self.snapshot.lock();
        self.bind.products.select(&state)
    }

    pub fn show_product_code(&self) -> bool {
        let state = self.snapshot.lock();
        self.bind.show_code.select(&state)
    }

    pub fn error_message(&self) -> String {
        let state = self.snapshot.lock();
        self.bind.error.select(&state)
    }

    pub fn current_product(&self) -> Option<Product> {
        let state = self.snapshot.lock();
        self.bind.current_product.select(&state)
    }

    pub fn mask_user_name(&self) -> bool {
        let state = self.snapshot.lock();
        self.bind.mask_user_name.select(&state)
    }

    pub fn current_user(&self) -> Option<User> {
        let state = self.snapshot.lock();
        self.bind.current_user.select(&state)
    }

    // -- Catalog interactions ------------------------------------------------

    pub fn select_next(&self) {
        self.move_selection(1);
    }

    pub fn select_prev(&self) {
        self.move_selection(-1);
    }

    fn move_selection(&self, delta: isize) {
        let products = self.products();
        if products.is_empty() {
            return;
        }
        let selected = self
            .current_product()
            .and_then(|current| products.iter().position(|p| p.id == current.id));
        let next = match selected {
            Some(index) => {
                (index as isize + delta).clamp(0, products.len() as isize - 1) as usize
            }
            None if delta < 0 => products.len() - 1,
            None => 0,
        };
        self.store
            .dispatch(CatalogAction::SetCurrentProduct(products[next].clone()).into());
    }

    pub fn toggle_product_code(&self) {
        let show = !self.show_product_code();
        self.store
            .dispatch(CatalogAction::ToggleProductCode(show).into());
    }

    pub fn new_product(&self) {
        self.store
            .dispatch(CatalogAction::InitializeCurrentProduct.into());
    }

    pub fn clear_current_product(&self) {
        self.store.dispatch(CatalogAction::ClearCurrentProduct.into());
    }

    pub fn reload(&self) {
        self.store.dispatch(CatalogAction::Load.into());
    }

    // -- Session interactions --------------------------------------------------

    pub fn toggle_mask(&self) {
        self.store.dispatch(SessionAction::MaskUserName.into());
    }

    pub fn submit_login(&mut self) {
        if let Err(message) = self.login.validate() {
            self.login.error = message.to_string();
            return;
        }
        let user_name = self.login.user_name.clone();
        let password = self.login.password.clone();
        if auth::log_in(&self.store, &user_name, &password) {
            self.login.clear();
            self.page = Page::Products;
        } else {
            self.login.error = "Invalid user name or password.".to_string();
        }
    }

    pub fn log_out(&self) {
        auth::log_out(&self.store);
    }
}
