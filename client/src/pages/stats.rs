//! Stats dashboard rendered from fixed demonstration data.

use leptos::prelude::*;

use crate::components::charts::{GroupedBarChart, HorizontalBarChart, LineChart, PieChart};
use crate::components::notice::{Notice, NoticeTone};
use crate::components::tab_bar::{TabBar, TabItem};
use crate::state::stats::{
    DEMO_NOTICE, Grouped, SalesPeriod, TOP_ITEMS_SHOWN, category_breakdown, customer_ages, drink_types,
    food_vs_drinks, format_value, hourly_revenue, hourly_traffic, initials, promotion_impact, staff_leaderboard,
    top_items, weekly_performance,
};
use crate::util::palette::{CORAL, TEAL};

const DONUT_INNER: f64 = 60.0;

#[component]
fn ChartCard(
    #[prop(into)] title: String,
    #[prop(into, optional)] subtitle: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="card chart-card">
            <header class="chart-card__header">
                <h2 class="card__title">{title}</h2>
                {(!subtitle.is_empty()).then(|| view! { <p class="chart-card__subtitle">{subtitle}</p> })}
            </header>
            {children()}
        </section>
    }
}

fn grouped_chart(data: Grouped) -> impl IntoView {
    let labels = data.labels();
    let rows = data.values();
    view! { <GroupedBarChart labels=labels series=data.series rows=rows /> }
}

#[component]
pub fn StatsPage() -> impl IntoView {
    let period = RwSignal::new(SalesPeriod::default());
    let period_tabs: Vec<TabItem> = SalesPeriod::ALL.iter().map(|p| TabItem::new(p.label(), p.label())).collect();
    let active_period = Signal::derive(move || period.get().label().to_owned());
    let on_period = Callback::new(move |key: String| {
        if let Some(p) = SalesPeriod::ALL.into_iter().find(|p| p.label() == key) {
            period.set(p);
        }
    });
    let sales = Signal::derive(move || period.get().data());

    view! {
        <div class="page stats-page">
            <header class="page__header">
                <h1>"Stats"</h1>
                <p class="page__intro">"How the bar is doing at a glance."</p>
            </header>

            <Notice tone=NoticeTone::Info title="Demo Data" message=DEMO_NOTICE />

            <div class="stats-grid">
                <ChartCard title="Total Sales" subtitle="Revenue over time">
                    <TabBar tabs=period_tabs active=active_period on_select=on_period />
                    <LineChart points=sales color=TEAL />
                </ChartCard>

                <ChartCard title="Top Selling Items" subtitle="Most popular items this week">
                    <ol class="top-items">
                        {top_items()
                            .into_iter()
                            .take(TOP_ITEMS_SHOWN)
                            .map(|item| {
                                view! {
                                    <li class="top-items__row">
                                        <div>
                                            <span class="top-items__name">{item.name}</span>
                                            <span class="top-items__category">{item.category}</span>
                                        </div>
                                        <span class="top-items__sales">{item.sales}</span>
                                        <span class=item.trend.class()>{item.trend.arrow()}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </ChartCard>

                <ChartCard title="Category Breakdown" subtitle="Share of sales by category">
                    <PieChart points=category_breakdown() inner=DONUT_INNER />
                </ChartCard>

                <ChartCard title="Hourly Customer Traffic" subtitle="Average customers per hour">
                    <LineChart points=hourly_traffic() color=TEAL filled=true />
                </ChartCard>

                <ChartCard title="Drink Types" subtitle="Share of drinks sold">
                    <PieChart points=drink_types() />
                </ChartCard>

                <ChartCard title="Weekly Performance" subtitle="Sales and customers by weekday">
                    {grouped_chart(weekly_performance())}
                </ChartCard>

                <ChartCard title="Customer Age Groups" subtitle="Percentage of customers">
                    <HorizontalBarChart points=customer_ages() />
                </ChartCard>

                <ChartCard title="Revenue by Hour" subtitle="Average revenue per hour">
                    <LineChart points=hourly_revenue() color=CORAL filled=true />
                </ChartCard>

                <ChartCard title="Food vs Drinks" subtitle="Monthly revenue split">
                    {grouped_chart(food_vs_drinks())}
                </ChartCard>

                <ChartCard title="Promotion Impact" subtitle="Sales before, during and after promotions">
                    {grouped_chart(promotion_impact())}
                </ChartCard>

                <ChartCard title="Staff Leaderboard" subtitle="Top performers this month">
                    <ul class="leaderboard">
                        {staff_leaderboard()
                            .into_iter()
                            .map(|member| {
                                view! {
                                    <li class="leaderboard__row">
                                        <span class="avatar">{initials(member.name)}</span>
                                        <div class="leaderboard__who">
                                            <span class="leaderboard__name">{member.name}</span>
                                            <span class="leaderboard__role">{member.role}</span>
                                        </div>
                                        <div class="leaderboard__metric">
                                            <span>{member.metric}</span>
                                            <strong>{format_value(member.metric, member.value)}</strong>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </ChartCard>
            </div>
        </div>
    }
}
