//! GraphQL schema definition.

use juniper::{EmptySubscription, FieldError, FieldResult, RootNode};
use uuid::Uuid;

use super::context::GraphQLContext;

// Domain edges (resolver functions)
use crate::domains::favorites::edges as favorite_edges;
use crate::domains::inquiries::edges as inquiry_edges;
use crate::domains::map_view::edges as map_edges;
use crate::domains::pricing::edges as pricing_edges;
use crate::domains::profiles::edges as profile_edges;
use crate::domains::properties::edges as property_edges;
use crate::domains::spots::edges as spot_edges;

// Domain data types (GraphQL types)
use crate::domains::inquiries::data::{CreateInquiryInput, InquiryData, InquiryStatusData};
use crate::domains::map_view::data::{MapViewData, ZoneTypeData};
use crate::domains::pricing::data::{PriceAssessmentData, PriceCheckInput};
use crate::domains::profiles::edges::{ProfileData, UpsertProfileInput};
use crate::domains::properties::data::{
    CreatePropertyInput, PropertyConnection, PropertyData, PropertyFilterInput,
    PropertyStatusData, UpdatePropertyInput,
};
use crate::domains::spots::data::SpotData;

// Domain models (for queries that bypass an edge)
use crate::domains::comparison::ComparisonSet;
use crate::domains::properties::models::Property;

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    // =========================================================================
    // Property Queries
    // =========================================================================

    /// Browse active listings with filters and offset pagination
    async fn properties(
        ctx: &GraphQLContext,
        filter: Option<PropertyFilterInput>,
        limit: Option<i32>,
        offset: Option<i32>,
    ) -> FieldResult<PropertyConnection> {
        property_edges::query_properties(&ctx.db_pool, filter, limit, offset).await
    }

    /// A single listing by id (bumps the view counter)
    async fn property(ctx: &GraphQLContext, id: Uuid) -> FieldResult<Option<PropertyData>> {
        property_edges::query_property(&ctx.db_pool, id).await
    }

    /// Featured listings for the home page
    async fn featured_properties(
        ctx: &GraphQLContext,
        limit: Option<i32>,
    ) -> FieldResult<Vec<PropertyData>> {
        property_edges::query_featured_properties(&ctx.db_pool, limit).await
    }

    /// The caller's own listings, any status
    async fn my_properties(ctx: &GraphQLContext) -> FieldResult<Vec<PropertyData>> {
        let user_id = ctx.require_user()?;
        property_edges::query_my_properties(&ctx.db_pool, user_id).await
    }

    /// Side-by-side comparison; order preserved, capped at four
    async fn compare(ctx: &GraphQLContext, ids: Vec<Uuid>) -> FieldResult<Vec<PropertyData>> {
        let set = ComparisonSet::from_ids(ids);
        let properties = Property::find_for_comparison(set.ids(), &ctx.db_pool)
            .await
            .map_err(|_| FieldError::new("Database error", juniper::Value::null()))?;
        Ok(properties.into_iter().map(PropertyData::from).collect())
    }

    // =========================================================================
    // Spot Queries
    // =========================================================================

    /// Points of interest in a city
    async fn spots(
        ctx: &GraphQLContext,
        city: String,
        category: Option<String>,
    ) -> FieldResult<Vec<SpotData>> {
        spot_edges::query_spots(&ctx.db_pool, city, category).await
    }

    /// Points of interest around one area
    async fn area_spots(
        ctx: &GraphQLContext,
        city: String,
        area: String,
    ) -> FieldResult<Vec<SpotData>> {
        spot_edges::query_area_spots(&ctx.db_pool, city, area).await
    }

    // =========================================================================
    // Map Queries
    // =========================================================================

    /// Heat zones and markers for the map page
    async fn map_view(
        ctx: &GraphQLContext,
        city: String,
        zone_type: ZoneTypeData,
    ) -> FieldResult<MapViewData> {
        map_edges::query_map_view(&ctx.db_pool, city, zone_type).await
    }

    // =========================================================================
    // Favorite Queries
    // =========================================================================

    /// The caller's favorited listings
    async fn favorites(ctx: &GraphQLContext) -> FieldResult<Vec<PropertyData>> {
        let user_id = ctx.require_user()?;
        favorite_edges::query_favorites(&ctx.db_pool, user_id).await
    }

    /// Just the favorited listing ids (for toggling heart icons)
    async fn favorite_ids(ctx: &GraphQLContext) -> FieldResult<Vec<Uuid>> {
        let user_id = ctx.require_user()?;
        favorite_edges::query_favorite_ids(&ctx.db_pool, user_id).await
    }

    // =========================================================================
    // Inquiry Queries
    // =========================================================================

    /// The caller's inquiry inbox across all their listings
    async fn my_inquiries(ctx: &GraphQLContext) -> FieldResult<Vec<InquiryData>> {
        let owner_id = ctx.require_user()?;
        inquiry_edges::query_my_inquiries(&ctx.db_pool, owner_id).await
    }

    /// Inquiries against one of the caller's listings
    async fn property_inquiries(
        ctx: &GraphQLContext,
        property_id: Uuid,
    ) -> FieldResult<Vec<InquiryData>> {
        let owner_id = ctx.require_user()?;
        inquiry_edges::query_property_inquiries(&ctx.db_pool, owner_id, property_id).await
    }

    // =========================================================================
    // Profile Queries
    // =========================================================================

    /// A user's profile; defaults to the caller's own
    async fn profile(
        ctx: &GraphQLContext,
        user_id: Option<Uuid>,
    ) -> FieldResult<Option<ProfileData>> {
        let user_id = match user_id {
            Some(id) => id,
            None => ctx.require_user()?,
        };
        profile_edges::query_profile(&ctx.db_pool, user_id).await
    }

    // =========================================================================
    // Pricing Queries
    // =========================================================================

    /// Instant rule-based price assessment
    fn quick_price_check(input: PriceCheckInput) -> FieldResult<PriceAssessmentData> {
        pricing_edges::quick_price_check(input)
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    // =========================================================================
    // Property Mutations
    // =========================================================================

    /// List a property for sale or rent
    async fn create_property(
        ctx: &GraphQLContext,
        input: CreatePropertyInput,
    ) -> FieldResult<PropertyData> {
        let user_id = ctx.require_user()?;
        property_edges::create_property(&ctx.db_pool, user_id, input).await
    }

    /// Edit an owned listing
    async fn update_property(
        ctx: &GraphQLContext,
        id: Uuid,
        input: UpdatePropertyInput,
    ) -> FieldResult<PropertyData> {
        let user_id = ctx.require_user()?;
        property_edges::update_property(&ctx.db_pool, user_id, id, input).await
    }

    /// Mark an owned listing active/sold/rented/inactive
    async fn update_property_status(
        ctx: &GraphQLContext,
        id: Uuid,
        status: PropertyStatusData,
    ) -> FieldResult<PropertyData> {
        let user_id = ctx.require_user()?;
        property_edges::update_property_status(&ctx.db_pool, user_id, id, status).await
    }

    /// Delete an owned listing
    async fn delete_property(ctx: &GraphQLContext, id: Uuid) -> FieldResult<bool> {
        let user_id = ctx.require_user()?;
        property_edges::delete_property(&ctx.db_pool, user_id, id).await
    }

    // =========================================================================
    // Favorite Mutations
    // =========================================================================

    /// Toggle a favorite; returns the resulting state
    async fn toggle_favorite(ctx: &GraphQLContext, property_id: Uuid) -> FieldResult<bool> {
        let user_id = ctx.require_user()?;
        favorite_edges::toggle_favorite(&ctx.db_pool, user_id, property_id).await
    }

    // =========================================================================
    // Inquiry Mutations
    // =========================================================================

    /// Send an inquiry to a listing owner; works signed out too
    async fn create_inquiry(
        ctx: &GraphQLContext,
        input: CreateInquiryInput,
    ) -> FieldResult<InquiryData> {
        inquiry_edges::create_inquiry(&ctx.db_pool, ctx.user_id(), input).await
    }

    /// Mark an inquiry responded or closed
    async fn update_inquiry_status(
        ctx: &GraphQLContext,
        id: Uuid,
        status: InquiryStatusData,
    ) -> FieldResult<InquiryData> {
        let owner_id = ctx.require_user()?;
        inquiry_edges::update_inquiry_status(&ctx.db_pool, owner_id, id, status).await
    }

    // =========================================================================
    // Profile Mutations
    // =========================================================================

    /// Create or update the caller's profile
    async fn upsert_profile(
        ctx: &GraphQLContext,
        input: UpsertProfileInput,
    ) -> FieldResult<ProfileData> {
        let user_id = ctx.require_user()?;
        profile_edges::upsert_profile(&ctx.db_pool, user_id, input).await
    }

    // =========================================================================
    // Pricing Mutations
    // =========================================================================

    /// Full AI-backed price analysis
    async fn check_price(
        ctx: &GraphQLContext,
        input: PriceCheckInput,
    ) -> FieldResult<PriceAssessmentData> {
        pricing_edges::check_price(ctx.server_deps.ai.as_ref(), input).await
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
