use catalog_composer::prelude::*;
use parking_lot::Mutex;
use std::sync::Arc;

// ------------------------------------
// 1. Recording product: hooks push into a shared log
// ------------------------------------
#[derive(Clone, Default)]
struct HookLog(Arc<Mutex<Vec<String>>>);

impl HookLog {
    fn entries(&self) -> Vec<String> {
        self.0.lock().clone()
    }
}

struct RecordingProduct {
    log: HookLog,
}

impl Product for RecordingProduct {
    fn name(&self) -> &str {
        "Recording"
    }

    fn prepare(&mut self, context: &OrderContext) {
        self.log.0.lock().push(format!("prepare:{}", context.order_id()));
    }

    fn bake(&mut self, context: &OrderContext) {
        self.log.0.lock().push(format!("bake:{}", context.order_id()));
    }

    fn cut(&mut self, context: &OrderContext) {
        self.log.0.lock().push(format!("cut:{}", context.order_id()));
    }

    fn box_up(&mut self, context: &OrderContext) {
        self.log.0.lock().push(format!("box:{}", context.order_id()));
    }
}

fn recording_store(log: &HookLog) -> PizzaStore<KeyedFactory> {
    let log = log.clone();
    PizzaStore::new(KeyedFactory::new().with("recording", move || RecordingProduct {
        log: log.clone(),
    }))
}

#[test]
fn test_hooks_run_once_each_in_order_with_one_context() {
    let log = HookLog::default();
    let store = recording_store(&log);
    let template = OrderContext::silent();

    let product = store.order_product("recording", &template).unwrap();
    assert_eq!(product.name(), "Recording");

    let entries = log.entries();
    let id = entries[0].split_once(':').map(|(_, id)| id.to_string()).unwrap();
    assert_ne!(id, template.order_id());
    assert_eq!(
        entries,
        vec![
            format!("prepare:{id}"),
            format!("bake:{id}"),
            format!("cut:{id}"),
            format!("box:{id}"),
        ]
    );
}

#[test]
fn test_repeat_orders_get_distinct_ids() {
    let log = HookLog::default();
    let store = recording_store(&log);
    let template = OrderContext::silent();

    store.order_product("recording", &template).unwrap();
    store.order_product("recording", &template).unwrap();

    let ids: Vec<String> = log
        .entries()
        .iter()
        .filter_map(|entry| entry.strip_prefix("prepare:").map(str::to_string))
        .collect();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
}

#[test]
fn test_unknown_key_returns_none_and_runs_nothing() {
    let log = HookLog::default();
    let store = recording_store(&log);

    assert!(store.create_product("unknown-key").is_none());
    assert!(store.order("unknown-key").is_none());
    assert!(log.entries().is_empty());
}

// ------------------------------------
// 2. Stock pizzas
// ------------------------------------
#[test]
fn test_cheese_order_completes_lifecycle() {
    let reporter = MemoryReporter::new();
    let store = PizzaStore::new(SimplePizzaFactory).with_reporter(Arc::new(reporter.clone()));

    let pizza = store.order("cheese").unwrap();

    assert_eq!(pizza.stages(), &LifecycleStage::ORDER);
    assert_eq!(reporter.len(), 4);
    assert_eq!(reporter.lines()[0], "Preparing Cheese Pizza");
    assert_eq!(reporter.lines()[3], "Boxing Cheese Pizza");
}

#[test]
fn test_anchovy_order_is_absent() {
    let reporter = MemoryReporter::new();
    let store = PizzaStore::new(SimplePizzaFactory).with_reporter(Arc::new(reporter.clone()));

    assert!(store.order("anchovy").is_none());
    assert!(reporter.is_empty());
}

#[test]
fn test_every_stock_key_produces_its_style() {
    let store = PizzaStore::new(SimplePizzaFactory);
    for style in PizzaStyle::ALL {
        let pizza = store.order(style.key()).unwrap();
        assert_eq!(pizza.name(), style.display_name());
    }
}

// ------------------------------------
// 3. Factory method without a store
// ------------------------------------
struct HouseSpecials;

impl Creator for HouseSpecials {
    fn create_product(&self, type_key: &str) -> Option<Box<dyn Product>> {
        match type_key {
            "special" => Some(Box::new(Pizza::greek())),
            _ => None,
        }
    }
}

#[test]
fn test_custom_creator_reuses_order_lifecycle() {
    let reporter = MemoryReporter::new();
    let context = OrderContext::new(Arc::new(reporter.clone()));

    let pizza = HouseSpecials.order_product("special", &context).unwrap();
    assert_eq!(pizza.name(), "Greek Pizza");
    assert_eq!(pizza.stages().len(), 4);
    assert_eq!(reporter.last().as_deref(), Some("Boxing Greek Pizza"));

    assert!(HouseSpecials.order_product("cheese", &context).is_none());
}

#[test]
fn test_shared_family_across_stores() {
    let family: Arc<dyn ProductFactory> =
        Arc::new(KeyedFactory::new().with("margherita", Pizza::cheese));

    let downtown = PizzaStore::new(family.clone());
    let uptown = PizzaStore::new(family);

    assert_eq!(downtown.menu(), uptown.menu());
    assert!(downtown.order("margherita").is_some());
    assert!(uptown.order("cheese").is_none());
}
