use std::rc::Rc;
use crate::books::repository::BookRepository;
use crate::catalog::factory::create_catalog_service;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::service::CheckoutServiceImpl;
use crate::core::domain::Configuration;

pub(crate) fn create_checkout_service(config: &Configuration, book_repository: Rc<dyn BookRepository>) -> Box<dyn CheckoutService> {
    let catalog_svc = create_catalog_service(config, book_repository);
    Box::new(CheckoutServiceImpl::new(config, catalog_svc))
}
