use super::{Catalog, Instancing, WindowRegistry};
use fusuma_ipc::{AppContext, AppId, WindowId};

/// What an open request turns into once aliases and instancing are applied.
#[derive(Debug, Clone, PartialEq)]
pub enum LaunchDecision {
    /// Surface an existing window, replacing its context when one is given.
    Reuse {
        id: WindowId,
        context: Option<AppContext>,
    },
    Create {
        app_id: AppId,
        context: Option<AppContext>,
    },
    /// No descriptor for the host application; nothing to open.
    Unknown(AppId),
}

pub fn route(
    catalog: &Catalog,
    registry: &WindowRegistry,
    app_id: AppId,
    context: Option<AppContext>,
) -> LaunchDecision {
    // An explicit context beats the alias default.
    let (app_id, context) = match catalog.resolve_alias(app_id) {
        Some(alias) => {
            tracing::debug!("Alias {} -> {} ({})", app_id, alias.target, alias.context);
            (alias.target, context.or_else(|| Some(alias.context.clone())))
        }
        None => (app_id, context),
    };

    let Some(descriptor) = catalog.descriptor(app_id) else {
        return LaunchDecision::Unknown(app_id);
    };

    if descriptor.instancing == Instancing::Single {
        if let Some(existing) = registry.find_by_application(app_id) {
            return LaunchDecision::Reuse {
                id: existing.id.clone(),
                context,
            };
        }
    }

    LaunchDecision::Create { app_id, context }
}
