//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use afterschool_app::{
    context::AppContext,
    domain::{
        checkout::MockCheckoutService, lessons::MockLessonsService, orders::MockOrdersService,
    },
};

use crate::{errors::catcher, state::State};

fn strict_lessons_mock() -> MockLessonsService {
    let mut lessons = MockLessonsService::new();

    lessons.expect_list_lessons().never();
    lessons.expect_get_lesson().never();
    lessons.expect_update_lesson().never();

    lessons
}

fn strict_checkout_mock() -> MockCheckoutService {
    let mut checkout = MockCheckoutService::new();

    checkout.expect_submit_checkout().never();

    checkout
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_submit_order().never();
    orders.expect_get_order().never();

    orders
}

fn service_with(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
    .catcher(catcher())
}

pub(crate) fn lessons_service(lessons: MockLessonsService, route: Router) -> Service {
    service_with(
        AppContext::new(
            Arc::new(lessons),
            Arc::new(strict_checkout_mock()),
            Arc::new(strict_orders_mock()),
        ),
        route,
    )
}

pub(crate) fn checkout_service(checkout: MockCheckoutService, route: Router) -> Service {
    service_with(
        AppContext::new(
            Arc::new(strict_lessons_mock()),
            Arc::new(checkout),
            Arc::new(strict_orders_mock()),
        ),
        route,
    )
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    service_with(
        AppContext::new(
            Arc::new(strict_lessons_mock()),
            Arc::new(strict_checkout_mock()),
            Arc::new(orders),
        ),
        route,
    )
}
