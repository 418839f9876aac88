/// What to do with the orbit listeners on a page hide/show transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerAction {
    Attach,
    Detach,
    Keep,
}

/// Listeners are dropped whenever the page is hidden, cached or not.
#[inline]
pub fn on_page_hide(attached: bool) -> ListenerAction {
    if attached {
        ListenerAction::Detach
    } else {
        ListenerAction::Keep
    }
}

/// A page restored from the back-forward cache while exploring gets its
/// listeners back; explore itself never runs twice.
#[inline]
pub fn on_page_show(exploring: bool, attached: bool) -> ListenerAction {
    if exploring && !attached {
        ListenerAction::Attach
    } else {
        ListenerAction::Keep
    }
}
