//! View model computation.
//!
//! Turns an [`AppState`] snapshot into a [`UIViewModel`]. Nothing here
//! mutates state; calling `compute_viewmodel` twice on the same state yields
//! equal view models.

use super::navigation::Tab;
use super::state::AppState;
use crate::catalog::MenuRow;
use crate::domain::{format_price, Comment, Deal, HistoryItem};
use crate::query::{match_ranges, SortKey};
use crate::ui::viewmodel::{
    format_points, AccountStats, AccountView, Body, CommentView, ComposerView, DealCard,
    DealDetailView, EmptyState, HeaderInfo, HistoryRow, MenuRowView, MenuSectionView,
    ProfileCard, SortChip, UIViewModel, UserBadge,
};

impl AppState {
    /// Computes the view model for the current screen.
    ///
    /// # Example
    ///
    /// ```rust
    /// use food_deals::app::{AppState, SessionDefaults};
    /// use food_deals::catalog::{BuiltinCatalog, CatalogSource};
    /// use food_deals::ui::Body;
    /// use std::sync::Arc;
    ///
    /// let state = AppState::new(Arc::new(BuiltinCatalog.load()?), SessionDefaults::default());
    /// let vm = state.compute_viewmodel();
    /// assert_eq!(vm.header.title, "Food Deals");
    /// assert!(matches!(vm.body, Body::DealList { .. }));
    /// # Ok::<(), food_deals::DealsError>(())
    /// ```
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let _span = tracing::debug_span!("compute_viewmodel",
            tab = %self.navigation().tab(),
            in_detail = self.navigation().in_detail()
        ).entered();

        if let Some(deal) = self.detail_deal() {
            return UIViewModel {
                header: HeaderInfo {
                    title: deal.deal_name.clone(),
                    subtitle: Some(deal.restaurant_name.clone()),
                    user_badge: None,
                },
                active_tab: self.navigation().tab(),
                show_navigation: false,
                body: Body::Detail(Box::new(self.compute_detail(deal))),
            };
        }

        let tab = self.navigation().tab();
        UIViewModel {
            header: self.compute_header(tab),
            active_tab: tab,
            show_navigation: true,
            body: match tab {
                Tab::Deals | Tab::Favorites => self.compute_deal_list(tab),
                Tab::History => self.compute_history(),
                Tab::Account => Body::Account(self.compute_account()),
            },
        }
    }

    fn compute_header(&self, tab: Tab) -> HeaderInfo {
        match tab {
            Tab::Deals => {
                let profile = &self.catalog().profile;
                HeaderInfo {
                    title: tab.title().to_string(),
                    subtitle: Some(format!("Near {}", self.location())),
                    user_badge: Some(UserBadge {
                        username: profile.username.clone(),
                        points: format_points(profile.points),
                    }),
                }
            }
            _ => HeaderInfo {
                title: tab.title().to_string(),
                subtitle: tab.subtitle().map(String::from),
                user_badge: None,
            },
        }
    }

    fn compute_deal_list(&self, tab: Tab) -> Body {
        let highlight_query = match tab {
            Tab::Deals => self.search_query(),
            _ => "",
        };
        let cards: Vec<DealCard> = self
            .visible_deals()
            .into_iter()
            .map(|deal| self.compute_card(deal, highlight_query))
            .collect();

        let empty_state = cards.is_empty().then(|| match tab {
            Tab::Favorites => EmptyState::new(
                "No favorite deals yet",
                "Save food deals you love to see them here",
            ),
            _ => EmptyState::new("No deals found", "Try adjusting your search"),
        });

        let (sort_chips, search_query) = if tab == Tab::Deals {
            (self.compute_sort_chips(), Some(self.search_query().to_string()))
        } else {
            (Vec::new(), None)
        };

        Body::DealList {
            sort_chips,
            search_query,
            cards,
            empty_state,
        }
    }

    fn compute_sort_chips(&self) -> Vec<SortChip> {
        SortKey::ALL
            .into_iter()
            .map(|key| SortChip {
                key,
                label: key.label().to_string(),
                active: key == self.sort_key(),
            })
            .collect()
    }

    fn compute_card(&self, deal: &Deal, query: &str) -> DealCard {
        DealCard {
            id: deal.id.clone(),
            deal_name: deal.deal_name.clone(),
            byline: format!("{} • {}", deal.restaurant_name, deal.cuisine),
            description: deal.description.clone(),
            image: deal.image.clone(),
            price: format_price(deal.discounted_price),
            original_price: format_price(deal.original_price),
            price_tier: deal.price_tier(),
            drumsticks: deal.drumsticks(),
            offer: deal.offer.clone(),
            expiration: deal.expiration_label(),
            expires: deal.expires_label(),
            location: deal.location_label(),
            is_favorite: self.store().is_favorite(&deal.id),
            usage_count: self.store().usage_count(&deal.id),
            highlight_ranges: match_ranges(&deal.deal_name, query),
        }
    }

    fn compute_history(&self) -> Body {
        let rows: Vec<HistoryRow> = self
            .history_items()
            .into_iter()
            .map(compute_history_row)
            .collect();
        let empty_state = rows.is_empty().then(|| {
            EmptyState::new("No order history", "Your past food orders will appear here")
        });
        Body::History { rows, empty_state }
    }

    fn compute_account(&self) -> AccountView {
        let profile = &self.catalog().profile;
        let store = self.store();
        AccountView {
            profile: ProfileCard {
                username: profile.username.clone(),
                points: format_points(profile.points),
                email: profile.email.clone(),
                location: self.location().to_string(),
            },
            stats: AccountStats {
                deals_used: store.total_usage(),
                total_saved: format!("${:.2}", store.total_saved()),
                favorites: store.favorite_count(),
            },
            sections: self
                .settings()
                .iter()
                .map(|section| MenuSectionView {
                    title: section.title.clone(),
                    rows: section
                        .items
                        .iter()
                        .map(|row| match row {
                            MenuRow::Action { label } => MenuRowView::Action {
                                label: label.clone(),
                            },
                            MenuRow::Toggle { label, enabled } => MenuRowView::Toggle {
                                label: label.clone(),
                                enabled: *enabled,
                            },
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    fn compute_detail(&self, deal: &Deal) -> DealDetailView {
        let composer = self.composer();
        let comments: Vec<CommentView> = self
            .detail_comments()
            .into_iter()
            .map(|comment| compute_comment(comment, composer.reply_target()))
            .collect();

        DealDetailView {
            card: self.compute_card(deal, ""),
            cuisine_line: format!("{} cuisine", deal.cuisine),
            rating: deal.rating,
            discount_percent: deal.discount_percent(),
            ingredients: deal.ingredients.clone(),
            share_text: deal.share_text(self.share_origin()),
            directions_url: deal.directions_url(self.location()),
            website_url: deal.website_url(),
            comments_heading: format!("Comments ({})", comments.len()),
            comments,
            composer: ComposerView {
                open: composer.is_open(),
                comment_text: composer.comment_text().to_string(),
                reply_target: composer.reply_target().map(String::from),
                reply_text: composer.reply_text().to_string(),
            },
        }
    }
}

fn compute_history_row(item: &HistoryItem) -> HistoryRow {
    let deal = &item.deal;
    HistoryRow {
        id: deal.id.clone(),
        deal_name: deal.deal_name.clone(),
        byline: format!("{} • {}", deal.restaurant_name, deal.cuisine),
        image: deal.image.clone(),
        quantity: item.quantity,
        order_total: format_price(item.order_total),
        ordered_date: item.ordered_date.clone(),
        saved: format!("${:.2}", deal.savings() * f64::from(item.quantity)),
        offer: deal.offer.clone(),
        user_rating: item.user_rating,
    }
}

fn compute_comment(comment: &Comment, reply_target: Option<&str>) -> CommentView {
    CommentView {
        id: comment.id.clone(),
        username: comment.username.clone(),
        points: format_points(comment.points),
        text: comment.text.clone(),
        timestamp: comment.timestamp.clone(),
        avatar_url: comment.avatar_url.clone(),
        replying: reply_target == Some(comment.id.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SessionDefaults;
    use crate::catalog::{BuiltinCatalog, CatalogSource};
    use std::sync::Arc;

    fn state() -> AppState {
        let catalog = Arc::new(BuiltinCatalog.load().unwrap());
        AppState::new(catalog, SessionDefaults::default())
    }

    fn cards(vm: &UIViewModel) -> &[DealCard] {
        match &vm.body {
            Body::DealList { cards, .. } => cards,
            other => panic!("expected deal list, got {other:?}"),
        }
    }

    #[test]
    fn deals_header_shows_location_and_points() {
        let vm = state().compute_viewmodel();
        assert_eq!(vm.header.subtitle.as_deref(), Some("Near Mission District, San Francisco"));
        let badge = vm.header.user_badge.unwrap();
        assert_eq!(badge.username, "FoodieExplorer");
        assert_eq!(badge.points, "2,450 pts");
        assert!(vm.show_navigation);
    }

    #[test]
    fn deal_cards_reflect_store_state() {
        let mut state = state();
        state.increment_usage("3");
        let vm = state.compute_viewmodel();
        let burger = cards(&vm).iter().find(|c| c.id == "3").unwrap();
        assert_eq!(burger.usage_count, 2);
        assert!(!burger.is_favorite);
        assert_eq!(burger.price, "$14.24");
        assert_eq!(burger.location, "0.3 miles • 3201 16th St");
    }

    #[test]
    fn search_highlights_deal_name() {
        let mut state = state();
        state.set_search_query("roll");
        let vm = state.compute_viewmodel();
        let cards = cards(&vm);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].highlight_ranges, vec![(7, 11)]);
    }

    #[test]
    fn empty_states_per_tab() {
        let mut state = state();
        state.set_search_query("zzz");
        match state.compute_viewmodel().body {
            Body::DealList { empty_state, .. } => {
                assert_eq!(empty_state.unwrap().message, "No deals found");
            }
            other => panic!("unexpected body {other:?}"),
        }

        state.toggle_favorite("1");
        state.toggle_favorite("2");
        state.select_tab(Tab::Favorites);
        match state.compute_viewmodel().body {
            Body::DealList { empty_state, sort_chips, .. } => {
                assert_eq!(empty_state.unwrap().subtitle, "Save food deals you love to see them here");
                assert!(sort_chips.is_empty());
            }
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn active_sort_chip_follows_state() {
        let mut state = state();
        state.set_sort_key(SortKey::ExpiringSoon);
        match state.compute_viewmodel().body {
            Body::DealList { sort_chips, .. } => {
                let active: Vec<SortKey> = sort_chips.iter().filter(|c| c.active).map(|c| c.key).collect();
                assert_eq!(active, vec![SortKey::ExpiringSoon]);
                assert_eq!(sort_chips.len(), 4);
            }
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn history_rows_most_recent_first() {
        let mut state = state();
        state.select_tab(Tab::History);
        let vm = state.compute_viewmodel();
        assert_eq!(vm.header.title, "Deal History");
        match vm.body {
            Body::History { rows, empty_state } => {
                let dates: Vec<&str> = rows.iter().map(|r| r.ordered_date.as_str()).collect();
                assert_eq!(dates, vec!["August 1, 2025", "July 28, 2025", "July 25, 2025"]);
                assert!(empty_state.is_none());
            }
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn account_stats_are_derived() {
        let mut state = state();
        state.select_tab(Tab::Account);
        state.toggle_favorite("5");
        let vm = state.compute_viewmodel();
        match vm.body {
            Body::Account(account) => {
                assert_eq!(account.stats.deals_used, 6);
                assert_eq!(account.stats.favorites, 3);
                // 2 x 7.50 + 1 x 4.75 + 3 x 9.00
                assert_eq!(account.stats.total_saved, "$46.75");
                assert_eq!(account.profile.points, "2,450 pts");
                assert_eq!(account.sections.len(), 5);
            }
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn detail_hides_navigation_and_lists_comments() {
        let mut state = state();
        state.select_tab(Tab::Favorites);
        state.select_deal("1");
        let vm = state.compute_viewmodel();
        assert!(!vm.show_navigation);
        assert_eq!(vm.active_tab, Tab::Favorites);
        match vm.body {
            Body::Detail(detail) => {
                assert_eq!(detail.card.id, "1");
                assert_eq!(detail.comments_heading, "Comments (4)");
                assert_eq!(detail.cuisine_line, "Italian cuisine");
                assert!(detail.share_text.ends_with("https://fooddeals.app/deal/1"));
                assert!(!detail.composer.open);
            }
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn viewmodel_is_deterministic() {
        let mut state = state();
        state.set_sort_key(SortKey::BestDeal);
        assert_eq!(state.compute_viewmodel(), state.compute_viewmodel());
    }
}
