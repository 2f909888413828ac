//! Path to view registry with eager, deferred and redirect entries

use once_cell::unsync::OnceCell;
use thiserror::Error;

/// Redirect chains longer than this are treated as loops
const MAX_REDIRECTS: usize = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("No route registered for {0}")]
    NotFound(String),

    #[error("Redirect loop starting at {0}")]
    RedirectLoop(String),
}

type Loader<V> = Box<dyn Fn() -> V>;

enum Target<V> {
    Redirect(String),
    Eager(V),
    Lazy { loader: Loader<V>, cache: OnceCell<V> },
}

impl<V: Clone> Target<V> {
    fn lazy(loader: Loader<V>) -> Self {
        Self::Lazy {
            loader,
            cache: OnceCell::new(),
        }
    }

    fn view(&self) -> Option<V> {
        match self {
            Self::Redirect(_) => None,
            Self::Eager(view) => Some(view.clone()),
            Self::Lazy { loader, cache } => Some(cache.get_or_init(|| loader()).clone()),
        }
    }
}

struct RouteEntry<V> {
    path: String,
    target: Target<V>,
}

/// Final path reached for a navigation and the view registered there
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<V> {
    pub path: String,
    pub view: V,
}

/// Registry mapping paths to views
///
/// Eager views are built on registration. Lazy views are built on the first
/// navigation that reaches them and reused afterwards.
pub struct RouteTable<V> {
    entries: Vec<RouteEntry<V>>,
    fallback: Option<Target<V>>,
}

impl<V: Clone> Default for RouteTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> RouteTable<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            fallback: None,
        }
    }

    /// Send `path` on to `to` unconditionally
    pub fn redirect(self, path: impl Into<String>, to: impl Into<String>) -> Self {
        self.insert(path.into(), Target::Redirect(normalize(&to.into())))
    }

    /// Register a view built immediately
    pub fn eager(self, path: impl Into<String>, factory: impl FnOnce() -> V) -> Self {
        self.insert(path.into(), Target::Eager(factory()))
    }

    /// Register a view built on first navigation
    pub fn lazy(self, path: impl Into<String>, factory: impl Fn() -> V + 'static) -> Self {
        self.insert(path.into(), Target::lazy(Box::new(factory)))
    }

    /// View used for paths with no entry
    pub fn fallback(mut self, factory: impl Fn() -> V + 'static) -> Self {
        self.fallback = Some(Target::lazy(Box::new(factory)));
        self
    }

    fn insert(mut self, path: String, target: Target<V>) -> Self {
        let path = normalize(&path);
        self.entries.retain(|entry| entry.path != path);
        self.entries.push(RouteEntry { path, target });
        self
    }

    fn lookup(&self, path: &str) -> Option<&Target<V>> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| &entry.target)
    }

    /// Resolve a navigated path, following redirects
    pub fn resolve(&self, path: &str) -> Result<Resolved<V>, RouteError> {
        let mut current = normalize(path);

        for _ in 0..=MAX_REDIRECTS {
            let Some(target) = self.lookup(&current) else {
                let view = self.fallback.as_ref().and_then(Target::view);
                return match view {
                    Some(view) => {
                        tracing::debug!(path = %current, "No route matched, using fallback");
                        Ok(Resolved {
                            path: current,
                            view,
                        })
                    }
                    None => Err(RouteError::NotFound(current)),
                };
            };

            match target {
                Target::Redirect(to) => {
                    tracing::debug!(from = %current, to = %to, "Redirecting");
                    current = to.clone();
                }
                target => {
                    let view = target.view().ok_or_else(|| RouteError::NotFound(current.clone()))?;
                    return Ok(Resolved {
                        path: current,
                        view,
                    });
                }
            }
        }

        Err(RouteError::RedirectLoop(normalize(path)))
    }

    /// Whether the view for `path` has been built
    pub fn is_loaded(&self, path: &str) -> bool {
        match self.lookup(&normalize(path)) {
            Some(Target::Eager(_)) => true,
            Some(Target::Lazy { cache, .. }) => cache.get().is_some(),
            _ => false,
        }
    }

    /// Registered paths in registration order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.path.as_str())
    }
}

/// Drop query and fragment, ensure a leading slash and no trailing slash
fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_matches('/');
    format!("/{trimmed}")
}
