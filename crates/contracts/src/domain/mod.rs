pub mod a101_asset;
